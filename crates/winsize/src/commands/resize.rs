/// Lists windows, asks for a handle, and moves that window.
///
/// Every handled outcome (no windows, bad input, refused resize) exits
/// with status 0. Only a broken stdout exits non-zero.
#[cfg(windows)]
pub fn execute() {
    let system = winsize_windows::Win32System;
    let mut input = std::io::stdin().lock();
    let mut out = std::io::stdout().lock();

    match winsize_core::run(&system, &mut input, &mut out) {
        Ok(outcome) => winsize_core::log_info!("finished: {}", outcome.message()),
        Err(e) => {
            winsize_core::log_error!("stdout write failed: {e}");
            eprintln!("Error: could not write to stdout: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(windows))]
pub fn execute() {
    eprintln!("Error: winsize only supports Windows.");
    std::process::exit(1);
}
