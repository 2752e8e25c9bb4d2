// File: crates/curve-render-skia/build.rs
// Summary: Links the Windows system libraries that Skia's font manager pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // registry lookups (RegOpenKeyExW, RegQueryInfoKeyW) from Skia/ICU
        println!("cargo:rustc-link-lib=advapi32");
    }
}
