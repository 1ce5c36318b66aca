use almanac::{resolve, ResolverConfig};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let config = ResolverConfig {
                verify: true,
                ..ResolverConfig::default()
            };
            let _ = resolve(data, &config);
        });
    }
}
