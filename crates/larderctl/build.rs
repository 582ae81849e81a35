// Build script for larderctl - embeds version at compile time

fn main() {
    // Packagers may pin the reported version; fall back to Cargo.toml
    let version =
        std::env::var("LARDER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=LARDER_VERSION={}", version);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=LARDER_VERSION");
}
