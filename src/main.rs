use os_config_applier::{
    cli::{get_args, run},
    constants::exit_codes,
    logger::{init_logging, LogLogger},
};

fn main() {
    let args = get_args();

    if let Err(err) = init_logging(args.verbose, args.log_file.as_deref()) {
        eprintln!("{err}");
        std::process::exit(exit_codes::FAILURE);
    }

    // The runner has already logged the failure.
    if run(args, &LogLogger).is_err() {
        std::process::exit(exit_codes::FAILURE);
    }
}
