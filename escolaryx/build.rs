fn main() {
    println!("cargo::rustc-check-cfg=cfg(tracing_pretty)");
    println!("cargo::rerun-if-env-changed=RUST_LOG_PRETTY");

    // RUST_LOG_PRETTY=1 switches the log output to the multi-line format
    if std::env::var("RUST_LOG_PRETTY").is_ok_and(|value| value == "1") {
        println!("cargo::rustc-cfg=tracing_pretty");
    }
}
