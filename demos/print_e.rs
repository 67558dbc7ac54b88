use fenvprobe::{init_tracing, probe, Fixed};

///! Walks n through the powers of ten and prints how close (1+1/n)^n gets to
///! e in single precision, before the base rounds to one.
///!  cargo run --example print_e --release

fn main() {
    init_tracing();

    let e = std::f32::consts::E;
    let mut n = 1.0f32;
    for _ in 0..10 {
        let res = match probe(n) {
            Ok(res) => res,
            Err(err) => {
                tracing::error!("{}", err);
                return;
            }
        };
        let flags: Vec<&str> =
            res.exceptions.iter().map(|x| x.as_str()).collect();
        println!(
            "n={:<12} {}  error={:+e}  [{}]",
            Fixed(n, 1).to_string(),
            Fixed(res.output, 6),
            res.output - e,
            flags.join(" ")
        );
        n *= 10.0;
    }
}
