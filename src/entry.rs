// Declaring entry points.
//
//   entry! {
//       fn glClear(mask: GLbitfield);
//       [(core Gl 10) => "glClear", (core Gles 20) => "glClear"]
//   }
//
// expands to `mod glClear { pub static ENTRY: EntryPoint }` holding
// the candidates, plus a `glClear` function that looks the address up
// through the default dispatch strategy and calls it.

macro_rules! provider {
    (core $api:ident $version:literal) => {
        $crate::api::Provider::core($crate::api::Api::$api, $version)
    };
    (ext $api:ident $name:literal) => {
        $crate::api::Provider::extension($crate::api::Api::$api, $name)
    };
}

macro_rules! entry {
    ($(
        $(#[$meta:meta])*
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
        [$(($($provider:tt)+) => $symbol:literal),* $(,)?]
    )+) => {$(
        #[allow(non_snake_case)]
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;

            const CANDIDATES: &[$crate::api::Candidate] = &[
                $($crate::api::Candidate::new(provider!($($provider)+), $symbol)),*
            ];

            pub static ENTRY: $crate::api::EntryPoint =
                $crate::api::EntryPoint::new(stringify!($name), CANDIDATES);

            pub type Signature = unsafe extern "system" fn($($ty),*) $(-> $ret)?;
        }

        $(#[$meta])*
        #[allow(non_snake_case, clippy::missing_safety_doc)]
        pub unsafe extern "system" fn $name($($arg: $ty),*) $(-> $ret)? {
            let f: $name::Signature = $crate::dispatch::address_of(&$name::ENTRY).cast();
            return f($($arg),*);
        }
    )+};
}
