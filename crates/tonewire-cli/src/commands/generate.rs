use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tonewire_format::{EVENT_TABLE, Emitter, Layout};

pub struct GenerateArgs {
    pub output: Option<PathBuf>,
    pub strict: bool,
}

pub fn run(args: GenerateArgs) {
    // Default policy: an overflowing table still renders, with a negative
    // unused-value report as the signal. --strict makes it fatal instead.
    let layout = if args.strict {
        Layout::compute_strict(EVENT_TABLE).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        })
    } else {
        Layout::compute(EVENT_TABLE)
    };

    let listing = Emitter::new(&layout).emit();

    if let Some(ref path) = args.output {
        fs::write(path, &listing).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        });
    } else {
        io::stdout().write_all(listing.as_bytes()).unwrap();
    }
}
