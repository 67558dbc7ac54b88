use fenvprobe::{init_tracing, run, Variant};

///! Probes (1+1/n)^n and reports the raised exceptions only.
///!  cargo run --example exceptions_only --release

fn main() {
    init_tracing();

    let stdout = std::io::stdout();
    if let Err(err) = run(Variant::ExceptionsOnly, &mut stdout.lock()) {
        tracing::error!("{}", err);
    }
}
