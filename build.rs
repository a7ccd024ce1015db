use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Expose `.env` entries to `option_env!` in src/config.rs
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in [
        "ECOLETA_API_URL",
        "ECOLETA_GEOGRAPHY_URL",
        "ECOLETA_REQUEST_TIMEOUT_MS",
        "ECOLETA_GEOLOCATION_TIMEOUT_MS",
        "ECOLETA_FALLBACK_LAT",
        "ECOLETA_FALLBACK_LNG",
        "ECOLETA_MAP_ZOOM",
        "ECOLETA_TILE_URL",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
