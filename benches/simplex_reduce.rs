// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use dmorse::{ReductionConfig, cone_matching, simplicial_complex};
use test_utilities::{greedy_matching, seven_vertex_torus};

fn main() {
    divan::main();
}

#[divan::bench(args = [4, 5, 6, 7, 8], sample_count = 10)]
fn sphere_cone_reduce(bencher: divan::Bencher, n: u32) {
    bencher
        .with_inputs(|| {
            let vertices: Vec<u32> = (0..n).collect();
            let mut sphere = simplicial_complex(&vertices, n as usize - 1);
            let matching = cone_matching(&sphere, 0);
            sphere
                .apply_matching(&matching, &ReductionConfig::default())
                .unwrap();
            sphere
        })
        .bench_local_values(|sphere| {
            let reduced = sphere.reduce().unwrap();

            // Don't optimize away..
            assert_eq!(reduced.cell_count(), 1);
        });
}

#[divan::bench(args = [4, 5, 6, 7, 8], sample_count = 10)]
fn sphere_greedy_match(bencher: divan::Bencher, n: u32) {
    bencher
        .with_inputs(|| {
            let vertices: Vec<u32> = (0..n).collect();
            simplicial_complex(&vertices, n as usize - 1)
        })
        .bench_local_values(|mut sphere| {
            let matched = greedy_matching(&mut sphere);
            assert!(!matched.is_empty());
        });
}

#[divan::bench(sample_count = 10)]
fn torus_ranks(bencher: divan::Bencher) {
    bencher
        .with_inputs(seven_vertex_torus)
        .bench_local_values(|torus| {
            assert_eq!(torus.ranks().len(), 3);
        });
}
