use mailbox_chess::session::session_loop::run_stdio_loop;

fn main() {
    if let Err(err) = run_stdio_loop() {
        eprintln!("mailbox_chess: {err}");
        std::process::exit(1);
    }
}
