use fenvprobe::{init_tracing, run, Variant};

///! Probes (1+1/n)^n and reports the raised exceptions and the category of
///! each result.
///!  cargo run --release

fn main() {
    init_tracing();

    let stdout = std::io::stdout();
    if let Err(err) = run(Variant::WithClassification, &mut stdout.lock()) {
        tracing::error!("{}", err);
    }
}
