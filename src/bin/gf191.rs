//! Interactive demonstration of GF(2^191) arithmetic.
//!
//! Reads two field elements A and B and an exponent N (hexadecimal, from
//! standard input), prints the results of the field operations on them,
//! checks a couple of field identities on random elements, and measures
//! the average time of each operation.

use std::io::{self, BufRead, Write};
use std::process;
use std::time::Instant;

use gf191::field::{parse_hex_le, GFb191};
use gf191::{CryptoRng, RngCore};
use rand_core::OsRng;

// Number of runs per operation for the timing measurements.
const TIMING_RUNS: u32 = 1000;

fn prompt<R: BufRead>(input: &mut R, msg: &str) -> io::Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof,
            "end of input"));
    }
    Ok(line.trim().to_string())
}

fn read_element<R: BufRead>(input: &mut R, name: &str) -> io::Result<GFb191> {
    let msg = format!("Enter {} in hexadecimal (up to 191 bits): ", name);
    loop {
        let s = prompt(input, &msg)?;
        match GFb191::from_hex(&s) {
            Ok(x) => return Ok(x),
            Err(e) => eprintln!("Error: {}. Try again.", e),
        }
    }
}

fn read_exponent<R: BufRead>(input: &mut R) -> io::Result<Vec<u8>> {
    loop {
        let s = prompt(input, "Enter the exponent N in hexadecimal: ")?;
        match parse_hex_le(&s) {
            Ok(e) => return Ok(e),
            Err(e) => eprintln!("Error: {}. Try again.", e),
        }
    }
}

// Uppercase hexadecimal of an unsigned little-endian integer, without
// leading zeros ("0" for zero).
fn format_hex_le(e: &[u8]) -> String {
    let mut s = String::new();
    for &x in e.iter().rev() {
        if s.is_empty() {
            if x != 0 {
                s.push_str(&format!("{:X}", x));
            }
        } else {
            s.push_str(&format!("{:02X}", x));
        }
    }
    if s.is_empty() {
        s.push('0');
    }
    s
}

// Check (a + b)*c = a*c + b*c and d*(1/d) = 1 on random elements.
// Returns false if an identity does not hold.
fn validate_field_properties<T: CryptoRng + RngCore>(rng: &mut T) -> bool {
    println!();
    println!("Field identities");
    let a = GFb191::random(rng);
    let b = GFb191::random(rng);
    let c = GFb191::random(rng);
    let d = GFb191::random(rng);

    let mut ok = true;
    if (a + b) * c == a * c + b * c {
        println!("(a + b) * c = a * c + b * c holds");
    } else {
        println!("FAILED: (a + b) * c != a * c + b * c");
        ok = false;
    }

    match d.inverse() {
        Ok(id) => {
            if d * id == GFb191::ONE {
                println!("d * d^(-1) = 1 holds");
            } else {
                println!("FAILED: d * d^(-1) != 1");
                ok = false;
            }
        }
        Err(e) => println!("d * d^(-1) = 1 skipped: {}", e),
    }

    if ok {
        println!("All checks passed");
    }
    ok
}

fn time_operation<T, F>(rng: &mut T, mut op: F) -> f64
where
    T: CryptoRng + RngCore,
    F: FnMut(&mut T, GFb191, GFb191),
{
    let mut total = 0f64;
    for _ in 0..TIMING_RUNS {
        let a = GFb191::random(rng);
        let b = GFb191::random(rng);
        let begin = Instant::now();
        op(rng, a, b);
        total += begin.elapsed().as_secs_f64();
    }
    total / (TIMING_RUNS as f64)
}

fn measure_execution_time<T: CryptoRng + RngCore>(rng: &mut T) {
    println!();
    println!("Timings (average seconds per operation)");

    let mut sink = GFb191::ZERO;
    let t_add = time_operation(rng, |_, a, b| sink += a + b);
    let t_mul = time_operation(rng, |_, a, b| sink += a * b);
    let t_sqr = time_operation(rng, |_, a, _| sink += a.square());
    let t_inv = time_operation(rng, |_, a, _| {
        if let Ok(x) = a.inverse() {
            sink += x;
        }
    });
    let t_pow = time_operation(rng, |rng, a, _| {
        let mut e = [0u8; GFb191::ENC_LEN];
        rng.fill_bytes(&mut e);
        e[GFb191::ENC_LEN - 1] &= 0x7F;
        sink += a.power(&e);
    });

    println!("Addition:       {:.6} s", t_add);
    println!("Multiplication: {:.6} s", t_mul);
    println!("Squaring:       {:.6} s", t_sqr);
    println!("Inversion:      {:.6} s", t_inv);
    println!("Exponentiation: {:.6} s", t_pow);
    println!("({})", sink.encode()[0]);
}

fn run() -> io::Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let a = read_element(&mut input, "A")?;
    let b = read_element(&mut input, "B")?;
    let n = read_exponent(&mut input)?;

    println!("A: {}", a);
    println!("B: {}", b);
    println!("N: {}", format_hex_le(&n));

    println!(" (0): {}", GFb191::ZERO);
    println!(" (1): {}", GFb191::ONE);

    println!("A+B: {}", a + b);
    println!("A*B: {}", a * b);
    println!("A^2: {}", a.square());
    match a.inverse() {
        Ok(x) => println!("A^(-1): {}", x),
        Err(e) => println!("A^(-1): {}", e),
    }
    println!("A^N: {}", a.power(&n));

    let mut rng = OsRng;
    let ok = validate_field_properties(&mut rng);
    measure_execution_time(&mut rng);
    Ok(ok)
}

fn main() {
    match run() {
        Ok(true) => (),
        Ok(false) => process::exit(2),
        Err(e) => {
            eprintln!("gf191: {}", e);
            process::exit(1);
        }
    }
}
