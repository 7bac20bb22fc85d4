//! OpenGL and OpenGL ES entry points.
//!
//! Each function resolves itself on first call and jumps straight to
//! the driver afterwards. A context must be current before calling
//! anything here, as with the driver's own exports.

use core::ffi::c_void;
use ::gl::types::{GLbitfield, GLboolean, GLenum, GLfloat, GLint, GLsizei, GLubyte, GLuint};
use crate::api::{Api, Candidate, EntryPoint, Provider};
use crate::dispatch::address_of;
use crate::engine;

pub use ::gl::types::GLDEBUGPROC;

entry! {
    fn glGetString(name: GLenum) -> *const GLubyte;
    [(core Gl 10) => "glGetString", (core Gles 10) => "glGetString", (core Gles 20) => "glGetString"]

    fn glGetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
    [(core Gl 30) => "glGetStringi", (core Gles 30) => "glGetStringi"]

    fn glGetIntegerv(pname: GLenum, data: *mut GLint);
    [(core Gl 10) => "glGetIntegerv", (core Gles 10) => "glGetIntegerv", (core Gles 20) => "glGetIntegerv"]

    fn glGetError() -> GLenum;
    [(core Gl 10) => "glGetError", (core Gles 10) => "glGetError", (core Gles 20) => "glGetError"]

    fn glClear(mask: GLbitfield);
    [(core Gl 10) => "glClear", (core Gles 10) => "glClear", (core Gles 20) => "glClear"]

    fn glClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    [(core Gl 10) => "glClearColor", (core Gles 10) => "glClearColor", (core Gles 20) => "glClearColor"]

    fn glViewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    [(core Gl 10) => "glViewport", (core Gles 10) => "glViewport", (core Gles 20) => "glViewport"]

    fn glVertex3f(x: GLfloat, y: GLfloat, z: GLfloat);
    [(core Gl 10) => "glVertex3f"]

    fn glGenVertexArrays(n: GLsizei, arrays: *mut GLuint);
    [
        (core Gl 30) => "glGenVertexArrays",
        (ext Gl "GL_ARB_vertex_array_object") => "glGenVertexArrays",
        (core Gles 30) => "glGenVertexArrays",
        (ext Gl "GL_APPLE_vertex_array_object") => "glGenVertexArraysAPPLE",
        (ext Gles "GL_OES_vertex_array_object") => "glGenVertexArraysOES",
    ]

    fn glBindVertexArray(array: GLuint);
    [
        (core Gl 30) => "glBindVertexArray",
        (ext Gl "GL_ARB_vertex_array_object") => "glBindVertexArray",
        (core Gles 30) => "glBindVertexArray",
        (ext Gl "GL_APPLE_vertex_array_object") => "glBindVertexArrayAPPLE",
        (ext Gles "GL_OES_vertex_array_object") => "glBindVertexArrayOES",
    ]

    fn glIsVertexArray(array: GLuint) -> GLboolean;
    [
        (core Gl 30) => "glIsVertexArray",
        (ext Gl "GL_ARB_vertex_array_object") => "glIsVertexArray",
        (core Gles 30) => "glIsVertexArray",
        (ext Gl "GL_APPLE_vertex_array_object") => "glIsVertexArrayAPPLE",
        (ext Gles "GL_OES_vertex_array_object") => "glIsVertexArrayOES",
    ]

    fn glDebugMessageCallback(callback: GLDEBUGPROC, user_param: *const c_void);
    [
        (core Gl 43) => "glDebugMessageCallback",
        (ext Gl "GL_KHR_debug") => "glDebugMessageCallback",
        (core Gles 32) => "glDebugMessageCallback",
        (ext Gl "GL_ARB_debug_output") => "glDebugMessageCallbackARB",
        (ext Gles "GL_KHR_debug") => "glDebugMessageCallbackKHR",
    ]
}

// glBegin and glEnd bracket a region where nearly every query is an
// error, so they keep the block guard up to date around the call.

#[allow(non_snake_case)]
pub mod glBegin {
    use super::*;

    const CANDIDATES: &[Candidate] = &[Candidate::new(Provider::core(Api::Gl, 10), "glBegin")];

    pub static ENTRY: EntryPoint = EntryPoint::new("glBegin", CANDIDATES);

    pub type Signature = unsafe extern "system" fn(GLenum);
}

#[allow(non_snake_case, clippy::missing_safety_doc)]
pub unsafe extern "system" fn glBegin(mode: GLenum) {
    // Resolve first: the guard makes version queries report the
    // in-block sentinel.
    let f: glBegin::Signature = address_of(&glBegin::ENTRY).cast();
    engine::global().guard().enter();
    f(mode);
}

#[allow(non_snake_case)]
pub mod glEnd {
    use super::*;

    const CANDIDATES: &[Candidate] = &[Candidate::new(Provider::core(Api::Gl, 10), "glEnd")];

    pub static ENTRY: EntryPoint = EntryPoint::new("glEnd", CANDIDATES);

    pub type Signature = unsafe extern "system" fn();
}

#[allow(non_snake_case, clippy::missing_safety_doc)]
pub unsafe extern "system" fn glEnd() {
    let f: glEnd::Signature = address_of(&glEnd::ENTRY).cast();
    f();
    engine::global().guard().leave();
}
