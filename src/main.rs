use std::env;
use std::process;
use std::sync::mpsc;
use std::time::Duration;

mod colors;
mod config;
mod digits;
mod screen;
mod timer;

use digits::DigitTable;
use timer::{Countdown, TimerState};

fn main() {
    let mut use_colors = true;
    let mut time_arg: Option<u64> = None;

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        print_usage_and_exit(1);
    }

    for arg in &args {
        match arg.as_str() {
            "-h" | "--help" => print_usage_and_exit(0),
            "-n" | "--no-colors" => use_colors = false,
            time => match timer::parse_time(time) {
                Ok(seconds) => time_arg = Some(seconds),
                Err(_) => print_usage_and_exit(1),
            },
        }
    }

    let total_seconds = match time_arg {
        Some(seconds) => seconds,
        None => print_usage_and_exit(1),
    };

    let table = match DigitTable::new() {
        Ok(table) => table,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let config = config::load_config();

    // The handler only signals; cleanup happens once, after the loop.
    let (interrupt_tx, interrupt_rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = interrupt_tx.send(());
    })
    .expect("Error setting Ctrl-C handler");

    config::execute_hook(&config.hooks.start);

    screen::hide_cursor();
    std::io::Write::flush(&mut std::io::stdout()).unwrap();

    run_countdown(&table, total_seconds, use_colors, &config, &interrupt_rx);

    screen::clear();
    screen::reset_colors();
    screen::show_cursor();
    std::io::Write::flush(&mut std::io::stdout()).unwrap();

    config::execute_hook(&config.hooks.interrupt);
}

fn run_countdown(
    table: &DigitTable,
    total_seconds: u64,
    use_colors: bool,
    config: &config::Config,
    interrupt_rx: &mpsc::Receiver<()>,
) {
    let countdown = Countdown::start(total_seconds);
    let mut last_state = TimerState::Running;

    loop {
        let elapsed = countdown.elapsed();
        let state = timer::state_at(countdown.total_seconds, elapsed);
        if last_state == TimerState::Running && state == TimerState::Expired {
            config::execute_hook(&config.hooks.expire);
        }
        last_state = state;

        screen::clear();

        let mut frame = String::new();
        if use_colors {
            let (red, green, blue) = colors::color_at(elapsed);
            frame.push_str(&colors::foreground(red, green, blue));
        }

        let remaining = timer::remaining_at(countdown.total_seconds, elapsed);
        frame.push_str(&table.render(&timer::format_time(remaining)));

        if state == TimerState::Expired {
            frame.push('\x07');
        }

        print!("{}", frame);
        std::io::Write::flush(&mut std::io::stdout()).unwrap();

        // The frame sleep doubles as the interrupt check.
        match interrupt_rx.recv_timeout(Duration::from_millis(100)) {
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}

fn print_usage_and_exit(code: i32) -> ! {
    eprintln!("Usage: termcd [OPTION]... TIME");
    eprintln!(
        "    TIME                      The time to count down from, specified in the MM:SS format. Minutes can be omitted if 0."
    );
    eprintln!("    -n        --no-colors     Don't color the output.");
    eprintln!("    -h        --help          Print help message.");
    process::exit(code);
}
