use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_LEN: usize = 14;

/// Random image filename: two 14-character lowercase-alphanumeric tokens
/// joined by an underscore, with a `.png` suffix.
///
/// Each character is drawn uniformly from the 36-symbol alphabet. The name
/// space is 36^28, so no existence check is made against prior files.
pub fn random_png_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}_{}.png", token(rng), token(rng))
}

fn token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TOKEN_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn is_token(s: &str) -> bool {
        s.len() == TOKEN_LEN
            && s.bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    }

    #[test]
    fn names_match_pattern() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10_000 {
            let name = random_png_name(&mut rng);
            let stem = name.strip_suffix(".png").expect("png suffix");
            let (a, b) = stem.split_once('_').expect("underscore separator");
            assert!(is_token(a), "bad token in {name}");
            assert!(is_token(b), "bad token in {name}");
        }
    }

    #[test]
    fn names_do_not_collide() {
        let mut rng = StdRng::seed_from_u64(42);
        let names: HashSet<_> = (0..10_000).map(|_| random_png_name(&mut rng)).collect();
        assert_eq!(names.len(), 10_000);
    }

    #[test]
    fn seeded_rng_reproduces_names() {
        let a = random_png_name(&mut StdRng::seed_from_u64(7));
        let b = random_png_name(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
