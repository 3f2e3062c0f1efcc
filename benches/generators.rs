use rand::prelude::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const STRING_SIZE: usize = 100;

#[allow(dead_code)]
pub(crate) fn gen_random_usizes(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = rand::distributions::Uniform::new_inclusive(1usize, 40_000_000usize);
    (0..n).map(|_| rng.sample(dist)).collect()
}

/// Keys `0..n` in random order, so no key repeats.
#[allow(dead_code)]
pub(crate) fn gen_unique_usizes(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut res: Vec<usize> = (0..n).collect();
    res.shuffle(&mut rng);
    res
}

#[allow(dead_code)]
pub(crate) fn get_unique_random_strings(n: usize, seed: u64) -> Vec<String> {
    use std::collections::HashSet;

    let alphabet: Vec<char> = (0u8..0x7f)
        .filter(|x| x.is_ascii_alphanumeric())
        .map(|x| x as char)
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut res = HashSet::with_capacity(n);
    while res.len() < n {
        let s: String = alphabet[..]
            .choose_multiple(&mut rng, STRING_SIZE)
            .collect();
        res.insert(s);
    }
    res.into_iter().collect()
}

#[allow(dead_code)]
pub(crate) fn choose_some<T>(vals: &[T], num: usize, seed: u64) -> Vec<T>
where
    T: Clone,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    vals.choose_multiple(&mut rng, num).cloned().collect()
}
