fn main() {
    let with_feature = std::env::var_os("CARGO_FEATURE_WITH_FEATURE").is_some();

    // C-side harness that drives the exported ABI through function pointers
    let mut build = cc::Build::new();
    build
        .include("include")
        .include("csrc")
        .warnings(true)
        .file("csrc/greeter_check.c")
        .cpp(false);
    if with_feature {
        build.define("WITH_FEATURE", None);
        println!("cargo:warning=compiling with feature enabled");
    }
    build.compile("greeter_check");

    println!("cargo:rerun-if-changed=csrc/greeter_check.c");
    println!("cargo:rerun-if-changed=csrc/greeter_check.h");
    println!("cargo:rerun-if-changed=include/greeter.h");
}
