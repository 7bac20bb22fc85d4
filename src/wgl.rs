//! WGL entry points.

use core::ffi::c_void;
use std::os::raw::{c_char, c_int};
use crate::api::{Api, Candidate, EntryPoint, Provider};
use crate::dispatch::{address_of, notify_context_changed};

pub type HDC = *mut c_void;
pub type HGLRC = *mut c_void;
pub type BOOL = c_int;

entry! {
    fn wglGetCurrentContext() -> HGLRC;
    [(core Wgl 10) => "wglGetCurrentContext"]

    fn wglGetExtensionsStringARB(hdc: HDC) -> *const c_char;
    [(ext Wgl "WGL_ARB_extensions_string") => "wglGetExtensionsStringARB"]

    fn wglSwapIntervalEXT(interval: c_int) -> BOOL;
    [(ext Wgl "WGL_EXT_swap_control") => "wglSwapIntervalEXT"]
}

#[allow(non_snake_case)]
pub mod wglMakeCurrent {
    use super::*;

    const CANDIDATES: &[Candidate] = &[Candidate::new(Provider::core(Api::Wgl, 10), "wglMakeCurrent")];

    pub static ENTRY: EntryPoint = EntryPoint::new("wglMakeCurrent", CANDIDATES);

    pub type Signature = unsafe extern "system" fn(HDC, HGLRC) -> BOOL;
}

/// Addresses from wglGetProcAddress belong to the context that was
/// current when they were asked for, so a successful switch drops the
/// calling thread's resolved entries.
#[allow(non_snake_case, clippy::missing_safety_doc)]
pub unsafe extern "system" fn wglMakeCurrent(hdc: HDC, hglrc: HGLRC) -> BOOL {
    let f: wglMakeCurrent::Signature = address_of(&wglMakeCurrent::ENTRY).cast();
    let ok = f(hdc, hglrc);
    if ok != 0 {
        notify_context_changed();
    }
    return ok;
}
