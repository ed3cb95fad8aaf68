use rlec::cli;

fn main() {
	match cli::run() {
		Ok(outcome) => std::process::exit(outcome.exit_code()),
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(2);
		}
	}
}
