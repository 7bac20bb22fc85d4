//! GLX entry points. They live in libGL next to desktop GL.

use core::ffi::c_void;
use std::os::raw::{c_char, c_int};

// Xlib handles, passed through untouched.
pub type Display = c_void;
pub type GLXContext = *mut c_void;
pub type GLXDrawable = std::os::raw::c_ulong;

entry! {
    fn glXGetCurrentContext() -> GLXContext;
    [(core Glx 10) => "glXGetCurrentContext"]

    fn glXGetCurrentDisplay() -> *mut Display;
    [(core Glx 12) => "glXGetCurrentDisplay"]

    fn glXQueryExtensionsString(dpy: *mut Display, screen: c_int) -> *const c_char;
    [(core Glx 11) => "glXQueryExtensionsString"]

    fn glXGetProcAddressARB(procname: *const u8) -> *const c_void;
    [(ext Glx "GLX_ARB_get_proc_address") => "glXGetProcAddressARB"]

    fn glXSwapIntervalEXT(dpy: *mut Display, drawable: GLXDrawable, interval: c_int);
    [(ext Glx "GLX_EXT_swap_control") => "glXSwapIntervalEXT"]
}
