use wavblocks::cli::{Args, BatchPipeline, Pipeline, is_batch_pattern, is_directory, logger};
use wavblocks::show::{Show, ShowOptions};

fn main() {
	let args = Args::parse();
	if let Err(e) = logger::init(args.log_level()) {
		eprintln!("Error: failed to install logger: {}", e);
		std::process::exit(1);
	}

	let options = args.reader_options();
	let mode = args.load_mode();

	let result = if is_batch_pattern(&args.input) {
		let show = args.show.then(|| ShowOptions { block_limit: args.blocks });
		let batch = BatchPipeline::new(args.input.clone(), args.output.clone(), show, options, mode);
		batch.run()
	} else if args.show {
		let opts = ShowOptions { block_limit: args.blocks };
		Show::new(args.input.clone(), opts, options, mode).run()
	} else if args.output.as_deref().is_some_and(is_directory) {
		let batch = BatchPipeline::new(args.input.clone(), args.output.clone(), None, options, mode);
		batch.run()
	} else {
		let pipeline = Pipeline::new(args.input.clone(), args.output.clone(), options, mode);
		pipeline.run().map(|_| ())
	};

	match result {
		Ok(()) => {
			if !args.show {
				if let Some(output) = &args.output {
					println!("ok: {} -> {}", args.input, output);
				}
			}
		}
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}
