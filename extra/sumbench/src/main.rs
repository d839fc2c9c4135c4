//! Checksum timing harness
//!
//! This application is for testing purposes only and is not intended for practical use

use adler32::{checksum_bstr, checksum_bytes, checksum_utf16};

fn main() {
    let time0 = std::time::Instant::now();
    while time0.elapsed().as_secs_f64() < 1.0 {
        stabilize();
    }

    let src_size = 0x100000;
    let input = random_bytes(src_size);
    let bstr: String = input.iter().map(|&b| b as char).collect();
    let units: Vec<u16> = bstr.encode_utf16().collect();

    let reference = checksum_bytes(&input);
    assert_eq!(checksum_bstr(&bstr), reference);

    for _ in 0..5 {
        let times = 100;

        let time0 = std::time::Instant::now();
        let mut sum_buf = 0;
        for _ in 0..times {
            sum_buf = checksum_bytes(&input);
        }
        let elapsed_buf = time0.elapsed();

        let time0 = std::time::Instant::now();
        let mut sum_bstr = 0;
        for _ in 0..times {
            sum_bstr = checksum_bstr(&bstr);
        }
        let elapsed_bstr = time0.elapsed();

        let time0 = std::time::Instant::now();
        let mut sum_text = 0;
        for _ in 0..times {
            sum_text = checksum_utf16(&units);
        }
        let elapsed_text = time0.elapsed();

        let mib = (src_size * times) as f64 / (1024.0 * 1024.0);
        // The utf16 path re-encodes the latin-1 content, so its
        // throughput is measured against the UTF-8 byte count.
        let mib_text = (bstr.len() * times) as f64 / (1024.0 * 1024.0);
        println!(
            "times {}: buf {:08x} {:.01}MiB/s, bstr {:08x} {:.01}MiB/s, utf16 {:08x} {:.01}MiB/s",
            times,
            sum_buf,
            mib / elapsed_buf.as_secs_f64(),
            sum_bstr,
            mib / elapsed_bstr.as_secs_f64(),
            sum_text,
            mib_text / elapsed_text.as_secs_f64(),
        );
    }
}

fn random_bytes(limit: usize) -> Vec<u8> {
    use rand::RngCore;
    let mut rng = rand::rng();
    let mut v = vec![0u8; limit];
    rng.fill_bytes(&mut v);
    v
}

fn stabilize() {
    use rand::RngCore;
    let mut rng = rand::rng();
    let len = 0x1000 + (rng.next_u32() as usize & 0xfffff);
    let mut v = vec![0u8; len];
    rng.fill_bytes(&mut v);
    std::hint::black_box(&v);
}
