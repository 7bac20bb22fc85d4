mod common;

use common::{engine, FakeDriver, NATIVE};
use lazygl::{Api, ClientApi, ContextKind, CurrentApi, Lib};

fn native_current() -> CurrentApi {
    return if NATIVE == Api::Wgl { CurrentApi::Wgl } else { CurrentApi::Glx };
}

#[cfg(windows)]
const NATIVE_MARKER: &str = "wglGetCurrentContext";
#[cfg(not(windows))]
const NATIVE_MARKER: &str = "glXGetCurrentContext";

#[test]
fn open_gl_library_decides_without_loading() {
    let engine = engine(FakeDriver::desktop("4.6", &[]));
    assert_eq!(engine.current_api(), native_current());
    let s = engine.driver().state();
    assert!(s.opened.is_empty());
    assert!(s.adopted.is_empty());
}

#[test]
fn open_egl_library_decides_without_loading() {
    let engine = engine(FakeDriver::egl_es(2, "OpenGL ES 3.0", &[]));
    assert_eq!(engine.current_api(), CurrentApi::Egl(ClientApi::OpenGlEs));
    assert!(engine.driver().state().opened.is_empty());
}

#[test]
fn loaded_marker_adopts_mapped_library() {
    let driver = FakeDriver::new();
    {
        let mut s = driver.state();
        s.installed.extend([Lib::Gl, Lib::Egl]);
        s.mapped.insert(Lib::Egl);
        s.loaded_symbols.insert("eglGetCurrentContext".to_string());
        s.current = Some(Api::Egl);
        s.egl_client = Some(ClientApi::OpenGl);
    }
    let engine = engine(driver);
    assert_eq!(engine.current_api(), CurrentApi::Egl(ClientApi::OpenGl));
    let s = engine.driver().state();
    assert_eq!(s.adopted, vec![Lib::Egl]);
    // libGL is on disk but was never needed.
    assert!(s.opened.is_empty());
}

#[test]
fn egl_only_process_never_opens_libgl() {
    let driver = FakeDriver::new();
    {
        let mut s = driver.state();
        s.installed.extend([Lib::Gl, Lib::Egl]);
        s.mapped.insert(Lib::Egl);
        s.loaded_symbols.insert("eglGetCurrentContext".to_string());
    }
    let engine = engine(driver);
    // Nothing current: the fallback probe runs, twice.
    assert_eq!(engine.current_api(), CurrentApi::None);
    assert_eq!(engine.current_api(), CurrentApi::None);
    let s = engine.driver().state();
    assert_eq!(s.adopted, vec![Lib::Egl]);
    assert!(!s.open.contains(&Lib::Gl));
    assert!(s.opened.is_empty());
}

#[test]
fn marker_without_mapping_changes_nothing() {
    let driver = FakeDriver::new();
    {
        let mut s = driver.state();
        s.installed.insert(Lib::Gl);
        s.loaded_symbols.insert(NATIVE_MARKER.to_string());
        s.current = Some(NATIVE);
    }
    let engine = engine(driver);
    // Falls through to actively opening libGL.
    assert_eq!(engine.current_api(), native_current());
    let s = engine.driver().state();
    assert!(s.adopted.is_empty());
    assert_eq!(s.opened, vec![Lib::Gl]);
}

#[test]
fn nothing_current() {
    let engine = engine(FakeDriver::new());
    assert_eq!(engine.current_api(), CurrentApi::None);
    assert_eq!(engine.current_embedded_api_kind(), ContextKind::None);
    assert!(engine.conservative_is_desktop());
    assert!(!engine.current_context_belongs_to(Api::Gl));
    assert!(!engine.current_context_belongs_to(Api::Egl));
}

#[test]
fn embedded_config_defaults_to_es() {
    let mut config = common::desktop_config();
    config.default_kind = ContextKind::Embedded;
    let engine = lazygl::engine::Engine::new(FakeDriver::new(), config);
    assert!(!engine.conservative_is_desktop());
}

#[test]
fn es_context_on_native_platform() {
    let engine = engine(FakeDriver::desktop("OpenGL ES 3.2 Mesa 23.1", &[]));
    assert_eq!(engine.current_embedded_api_kind(), ContextKind::Embedded);
    assert!(engine.current_context_belongs_to(Api::Gles));
    assert!(!engine.current_context_belongs_to(Api::Gl));
    assert!(engine.current_context_belongs_to(NATIVE));
}

#[test]
fn egl_desktop_context() {
    let driver = FakeDriver::egl_es(2, "4.6", &[]);
    driver.state().egl_client = Some(ClientApi::OpenGl);
    let engine = engine(driver);
    assert_eq!(engine.current_embedded_api_kind(), ContextKind::Desktop);
    assert!(engine.current_context_belongs_to(Api::Egl));
    assert!(engine.current_context_belongs_to(Api::Gl));
}

#[test]
fn block_means_desktop() {
    let engine = engine(FakeDriver::desktop("OpenGL ES 3.2", &[]));
    engine.guard().enter();
    assert!(engine.conservative_is_desktop());
    engine.guard().leave();
    assert!(!engine.conservative_is_desktop());
}
