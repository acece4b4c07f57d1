use std::env;

macro_rules! err {
    ($e: expr) => {{
        ::ldlink::print_error($e);
        ::std::process::exit(1);
    }};
}

fn main() {
    let argv: Vec<String> = env::args().skip(1).collect();

    if let Err(ref e) = ldlink::link(&argv) {
        err!(e);
    }
}
