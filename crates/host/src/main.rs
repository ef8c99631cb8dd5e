use std::net::TcpListener;
use std::path::PathBuf;

use portico_host::api;
use portico_host::config::Settings;
use tokio::signal;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_banner() {
    eprintln!();
    eprintln!("  \x1b[1;36m╔════════════════════════════════════════════╗\x1b[0m");
    eprintln!("  \x1b[1;36m║                                            ║\x1b[0m");
    eprintln!("  \x1b[1;36m║\x1b[0m   \x1b[1;96mportico\x1b[0m                                  \x1b[1;36m║\x1b[0m");
    eprintln!("  \x1b[1;36m║\x1b[0m   \x1b[2;37mYour services, one page.\x1b[0m  \x1b[2;35mv{VERSION:<14}\x1b[0m\x1b[1;36m║\x1b[0m");
    eprintln!("  \x1b[1;36m║                                            ║\x1b[0m");
    eprintln!("  \x1b[1;36m╚════════════════════════════════════════════╝\x1b[0m");
    eprintln!();
}

fn print_connection_info(bind: &str, http_port: u16) {
    eprintln!("  \x1b[1;32m[page]\x1b[0m   Single binary mode - all assets embedded");
    eprintln!("  \x1b[1;32m[http]\x1b[0m   Listening on port \x1b[1;96m{http_port}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[1;37m>\x1b[0m Open: \x1b[4;96mhttp://{bind}:{http_port}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mPress Ctrl+C to stop\x1b[0m");
    eprintln!();
}

/// Graceful start: Check if port is available
fn check_port_available(bind: &str, port: u16) -> bool {
    TcpListener::bind(format!("{bind}:{port}")).is_ok()
}

/// Graceful start: Find available port starting from default
fn find_available_port(bind: &str, start: u16) -> Option<u16> {
    (start..start + 10).find(|&port| check_port_available(bind, port))
}

fn print_help() {
    println!("portico - Your services, one page");
    println!();
    println!("USAGE:");
    println!("    portico [serve] [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config PATH  Read settings from PATH instead of the default");
    println!("    -p, --port N       Listen on port N (overrides settings)");
    println!("    -b, --bind ADDR    Bind to ADDR (overrides settings)");
    println!("    -h, --help         Print help information");
    println!("    -v, --version      Print version");
    println!();
    println!("CONFIG:");
    println!("    ~/.config/portico/portico.toml");
    println!();
    println!("EXAMPLES:");
    println!("    portico                          Start with the default settings");
    println!("    portico --config ./portico.toml  Start with a local settings file");
    println!("    portico --port 9000              Start on port 9000");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging (tracing)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Handle --version, --help and the serve options
    let args: Vec<String> = std::env::args().collect();
    let mut settings_path: Option<PathBuf> = None;
    let mut port_override: Option<u16> = None;
    let mut bind_override: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("portico {VERSION}");
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" if i + 1 < args.len() => {
                settings_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--port" | "-p" if i + 1 < args.len() => {
                match args[i + 1].parse::<u16>() {
                    Ok(p) => port_override = Some(p),
                    Err(_) => {
                        eprintln!("error: invalid port '{}'", args[i + 1]);
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--bind" | "-b" if i + 1 < args.len() => {
                bind_override = Some(args[i + 1].clone());
                i += 2;
            }
            // "serve" is the default and only command; stray args are ignored
            _ => i += 1,
        }
    }

    print_banner();

    // === LOAD SETTINGS ===
    let mut settings = if let Some(path) = settings_path {
        let Some(settings) = Settings::load_from_path(&path) else {
            eprintln!(
                "  \x1b[1;31m[error]\x1b[0m  Could not read settings from {}",
                path.display()
            );
            std::process::exit(1);
        };
        eprintln!("  \x1b[1;32m[config]\x1b[0m Loaded from {}", path.display());
        settings
    } else {
        Settings::create_default_if_missing();
        let settings = Settings::load();
        eprintln!(
            "  \x1b[1;32m[config]\x1b[0m Loaded from {}",
            Settings::default_settings_path().display()
        );
        settings
    };

    // Command line overrides win over the settings file
    if let Some(port) = port_override {
        settings.server.http_port = port;
    }
    if let Some(bind) = bind_override {
        settings.server.bind = bind;
    }

    // === GRACEFUL START ===
    let http_port = if check_port_available(&settings.server.bind, settings.server.http_port) {
        settings.server.http_port
    } else {
        eprintln!(
            "  \x1b[1;33m[warn]\x1b[0m   Port {} in use, finding alternative...",
            settings.server.http_port
        );
        if let Some(p) = find_available_port(&settings.server.bind, settings.server.http_port + 1) {
            eprintln!("  \x1b[1;32m[check]\x1b[0m  Using HTTP port {p}");
            p
        } else {
            eprintln!(
                "  \x1b[1;31m[error]\x1b[0m  No available HTTP ports in range {}-{}",
                settings.server.http_port,
                settings.server.http_port + 10
            );
            std::process::exit(1);
        }
    };

    eprintln!(
        "  \x1b[1;32m[apps]\x1b[0m   {} apps, {} links from settings",
        settings.apps.len(),
        settings.links.len()
    );

    let bind = settings.server.bind.clone();
    print_connection_info(&bind, http_port);

    // === START EMBEDDED HTTP SERVER (axum) ===
    let state = api::AppState::new(settings);
    let app = api::router(state);

    let http_addr = format!("{bind}:{http_port}");
    let http_listener = tokio::net::TcpListener::bind(&http_addr).await?;

    let http_server = axum::serve(http_listener, app);

    // === GRACEFUL SHUTDOWN HANDLER ===
    let shutdown_signal = async {
        // Wait for Ctrl+C or SIGTERM
        let ctrl_c = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            () = ctrl_c => {},
            () = terminate => {},
        }

        eprintln!();
        eprintln!("  \x1b[1;33m[peace]\x1b[0m  Graceful shutdown initiated...");
        eprintln!("  \x1b[1;32m[done]\x1b[0m   Page is down. See you.");
        eprintln!();
    };

    // Run the server with the shutdown handler
    tokio::select! {
        result = http_server => {
            if let Err(e) = result {
                eprintln!("  \x1b[1;31m[error]\x1b[0m  HTTP server error: {e}");
            }
        }
        () = shutdown_signal => {}
    }

    Ok(())
}
