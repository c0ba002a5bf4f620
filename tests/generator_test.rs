use rand::rngs::StdRng;
use rand::SeedableRng;
use sociogram::graph::{generate_full, generate_random};
use sociogram::{Person, SocialGraph, Strategy};

fn people(n: usize) -> Vec<Person> {
    (0..n).map(|i| Person::new(format!("P{}", i))).collect()
}

#[test]
fn test_full_generates_ordered_pairs() {
    for n in 0..8 {
        let p = people(n);
        let connections = generate_full(&p);
        assert_eq!(connections.len(), n * n.saturating_sub(1));
    }
}

#[test]
fn test_random_initiator_bound() {
    let p = people(20);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let connections = generate_random(&p, &mut rng);
        assert!(connections.len() <= p.len());

        let mut initiators: Vec<&Person> = connections.iter().map(|c| &c.0).collect();
        initiators.sort();
        initiators.dedup();
        assert_eq!(initiators.len(), connections.len());
    }
}

#[test]
fn test_random_network_is_sparse() {
    // At most one initiated connection each, so degree sum <= 2n
    let p = people(50);
    let mut rng = StdRng::seed_from_u64(99);
    let g = SocialGraph::generated(p, Strategy::Random, &mut rng);

    let total: usize = g.degrees().map(|(_, d)| d).sum();
    assert!(total <= 2 * 50);
    assert_eq!(total, 2 * g.edge_count());
}

#[test]
fn test_generated_graph_has_no_self_loops() {
    let mut rng = StdRng::seed_from_u64(5);
    for strategy in [Strategy::Random, Strategy::Full] {
        let g = SocialGraph::generated(people(6), strategy, &mut rng);
        assert!(g.connections().iter().all(|c| !c.is_self_loop()));
    }
}
