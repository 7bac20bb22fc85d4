use build_target;
use build_target::Os;
use std::env;

// Pick the dispatch strategy for the target. WGL hands out addresses
// that are only valid for the context current on the calling thread,
// so Windows gets per-thread tables. Everyone else shares one cell
// per entry point unless the feature asks otherwise.
fn tls_dispatch_wanted(os: &Os) -> bool {
    if env::var_os("CARGO_FEATURE_THREAD_LOCAL_DISPATCH").is_some() {
        return true;
    }
    return match os {
        Os::Windows => true,
        _ => false,
    };
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(lazygl_tls_dispatch)");
    let os = build_target::target_os().unwrap();
    if tls_dispatch_wanted(&os) {
        println!("cargo:rustc-cfg=lazygl_tls_dispatch");
    }
}
