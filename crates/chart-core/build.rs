// File: crates/chart-core/build.rs
// Summary: Build script linking the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry access (RegOpenKeyExW, RegQueryInfoKeyW) used by the system font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
