use std::env;
use std::fs;
use std::path::Path;

/// A logical browser bundle: ordered first-party modules, shared helpers
/// first, entry last.
struct Bundle {
    name: &'static str,
    modules: &'static [&'static str],
}

const BUNDLES: &[Bundle] = &[
    Bundle {
        name: "hello_world",
        modules: &["client/util/say_hello.js", "client/hello_world/index.js"],
    },
    Bundle {
        name: "component_tree",
        modules: &[
            "client/util/say_hello.js",
            "client/component_tree/index.js",
        ],
    },
];

/// Vendored third-party sources ship verbatim; first-party sources go
/// through the minifier.
fn transform(path: &str, source: &str) -> String {
    if path.contains("/vendor/") {
        return source.to_string();
    }
    minifier::js::minify(source).to_string()
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");

    for bundle in BUNDLES {
        // Rerun if any module file changes
        for path in bundle.modules {
            println!("cargo:rerun-if-changed={path}");
        }

        // Concatenate transformed modules into a single IIFE
        let mut concat = String::from("(function(){\"use strict\";\n");
        for path in bundle.modules {
            let source =
                fs::read_to_string(path).unwrap_or_else(|_| panic!("{path} not found"));
            concat.push_str(&transform(path, &source));
            concat.push('\n');
        }
        concat.push_str("})();\n");

        let out_path = Path::new(&out_dir).join(format!("{}.js", bundle.name));
        fs::write(&out_path, &concat)
            .unwrap_or_else(|_| panic!("failed to write {}", out_path.display()));

        // Hash the emitted bundle for cache-busting
        let hash = crc32fast::hash(concat.as_bytes());
        let name = bundle.name.to_uppercase();
        println!("cargo::rustc-env=SALUTON_{name}_HASH={hash:08x}");
    }
}
