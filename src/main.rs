//! Scorekeeper entry point
//!
//! Native builds run an interactive shell over stdin. The web build starts
//! from `platform::web::start` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::{self, BufRead, Write};

    use scorekeeper::platform::FileStore;
    use scorekeeper::shell::{self, Command, Outcome};
    use scorekeeper::{Scorekeeper, Settings};

    env_logger::init();
    let settings = Settings::load();
    log::info!("Scorekeeper (native) starting...");
    log::info!("Saving to {}", settings.data_dir.display());

    let mut keeper = Scorekeeper::new(
        FileStore::new(&settings.data_dir),
        settings.id_generator(),
    );

    println!("{}", shell::render_table(keeper.state()));
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        let _ = stdout.flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        }
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };
        match shell::execute(&mut keeper, command) {
            Outcome::Redraw => println!("{}", shell::render_table(keeper.state())),
            Outcome::Message(msg) => println!("{msg}"),
            Outcome::Quit => break,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
