//! Host-side helper: `cargo run` builds the wasm bundle into `static/pkg`
//! and serves `static/` on http://127.0.0.1:8000.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::process::{self, Command, Stdio};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            log::error!("wasm-pack finished with errors");
            process::exit(1);
        }
        Err(_) => {
            log::warn!(
                "wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/); serving whatever is in static/pkg"
            );
        }
    }

    log::info!("Launching local server at http://127.0.0.1:8000 …");
    let server = Command::new("python3")
        .args(["-m", "http.server", "8000", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status();

    match server {
        Ok(st) if st.success() => {}
        Ok(st) => {
            log::error!("http server exited with {st}");
            process::exit(1);
        }
        Err(err) => {
            log::error!("failed to start http server: {err}");
            process::exit(1);
        }
    }
}
