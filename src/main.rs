use std::io;
use std::path::PathBuf;
use structopt::StructOpt;

use lifo::{BoundedStack, Interpreter, Program};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lifo",
    about = "Runs push/pop/peek scripts against a fixed-capacity stack."
)]
struct Opt {
    /// Maximum number of values the stack may hold
    #[structopt(short, long, allow_hyphen_values = true)]
    capacity: i64,

    /// Enables trace log level
    #[structopt(short, long)]
    trace: bool,

    /// Enables info log level
    #[structopt(short, long)]
    info: bool,

    /// The maxiumum number of instructions to execute
    #[structopt(short, long)]
    max_steps: Option<usize>,

    /// The stack script to run
    #[structopt(parse(from_os_str))]
    file_name: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let log_level = if opt.trace {
        log::Level::Trace
    } else if opt.info {
        log::Level::Info
    } else {
        log::Level::Warn
    };

    simple_logger::init_with_level(log_level)?;

    let stack = BoundedStack::with_signed_capacity(opt.capacity)?;
    let program = Program::from_file(&opt.file_name)?;

    let stdout = io::stdout();
    let mut interpreter = Interpreter::new(program, stack, stdout.lock());

    if let Some(max_steps) = opt.max_steps {
        interpreter.run_until(max_steps)?;
    } else {
        interpreter.run()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_capacity_reaches_the_stack() {
        for args in [
            ["lifo", "--capacity", "-1", "script.lifo"],
            ["lifo", "-c", "-3", "script.lifo"],
        ] {
            let opt = Opt::from_iter_safe(args).unwrap();

            assert!(opt.capacity < 0);
            assert!(matches!(
                BoundedStack::<u8>::with_signed_capacity(opt.capacity),
                Err(lifo::Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn flags_still_parse_after_capacity() {
        let opt = Opt::from_iter_safe(["lifo", "-c", "2", "-t", "-m", "5", "s.lifo"]).unwrap();

        assert_eq!(opt.capacity, 2);
        assert!(opt.trace);
        assert_eq!(opt.max_steps, Some(5));
    }
}
