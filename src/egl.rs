//! EGL entry points.

use core::ffi::c_void;
use std::os::raw::c_char;
use khronos_egl::{Attrib, Boolean, EGLContext, EGLDisplay, Enum, Int};

entry! {
    fn eglGetCurrentContext() -> EGLContext;
    [(core Egl 10) => "eglGetCurrentContext"]

    fn eglGetCurrentDisplay() -> EGLDisplay;
    [(core Egl 10) => "eglGetCurrentDisplay"]

    fn eglQueryString(dpy: EGLDisplay, name: Int) -> *const c_char;
    [(core Egl 10) => "eglQueryString"]

    fn eglQueryAPI() -> Enum;
    [(core Egl 12) => "eglQueryAPI"]

    fn eglQueryContext(dpy: EGLDisplay, ctx: EGLContext, attribute: Int, value: *mut Int) -> Boolean;
    [(core Egl 10) => "eglQueryContext"]

    fn eglGetProcAddress(procname: *const c_char) -> *const c_void;
    [(core Egl 10) => "eglGetProcAddress"]

    fn eglCreateImage(dpy: EGLDisplay, ctx: EGLContext, target: Enum, buffer: *mut c_void, attrib_list: *const Attrib) -> *mut c_void;
    [(core Egl 15) => "eglCreateImage"]

    fn eglCreateImageKHR(dpy: EGLDisplay, ctx: EGLContext, target: Enum, buffer: *mut c_void, attrib_list: *const Int) -> *mut c_void;
    [(ext Egl "EGL_KHR_image") => "eglCreateImageKHR", (ext Egl "EGL_KHR_image_base") => "eglCreateImageKHR"]

    fn eglClientWaitSync(dpy: EGLDisplay, sync: *mut c_void, flags: Int, timeout: u64) -> Int;
    [
        (core Egl 15) => "eglClientWaitSync",
        (ext Egl "EGL_KHR_fence_sync") => "eglClientWaitSyncKHR",
        (ext Egl "EGL_KHR_reusable_sync") => "eglClientWaitSyncKHR",
    ]

    fn eglClientWaitSyncKHR(dpy: EGLDisplay, sync: *mut c_void, flags: Int, timeout: u64) -> Int;
    [
        (ext Egl "EGL_KHR_fence_sync") => "eglClientWaitSyncKHR",
        (ext Egl "EGL_KHR_reusable_sync") => "eglClientWaitSyncKHR",
        (core Egl 15) => "eglClientWaitSync",
    ]
}
