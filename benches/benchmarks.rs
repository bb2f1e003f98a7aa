criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        classifying_random_hand,
        evaluating_draw_one,
        evaluating_draw_five,
        analyzing_random_deal,
        converting_canonical_key,
        converting_isomorphism,
        exhausting_deals,
}

fn classifying_random_hand(c: &mut criterion::Criterion) {
    c.bench_function("classify a 5-card Hand", |b| {
        let hand = Deal::random().hand();
        b.iter(|| Category::from((hand, Game::DoubleDoubleBonus)))
    });
}

fn evaluating_draw_one(c: &mut criterion::Criterion) {
    let paytable = paytable();
    let engine = Engine::from(paytable.as_ref());
    let deal = Deal::random();
    let hold = Hold::try_from(0b01111).unwrap();
    c.bench_function("evaluate a 1-card draw (47 outcomes)", |b| {
        b.iter(|| engine.evaluate(&deal, hold))
    });
}

fn evaluating_draw_five(c: &mut criterion::Criterion) {
    let paytable = paytable();
    let engine = Engine::from(paytable.as_ref());
    let deal = Deal::random();
    c.bench_function("evaluate a 5-card draw (1,533,939 outcomes)", |b| {
        b.iter(|| engine.evaluate(&deal, Hold::NONE))
    });
}

fn analyzing_random_deal(c: &mut criterion::Criterion) {
    let paytable = paytable();
    let engine = Engine::from(paytable.as_ref());
    let deal = Deal::random();
    c.bench_function("analyze all 32 holds of a Deal", |b| {
        b.iter(|| engine.analyze(&deal))
    });
}

fn converting_canonical_key(c: &mut criterion::Criterion) {
    c.bench_function("convert a Deal to its CanonicalKey", |b| {
        let deal = Deal::random();
        b.iter(|| CanonicalKey::from(&deal))
    });
}

fn converting_isomorphism(c: &mut criterion::Criterion) {
    c.bench_function("convert a Deal to its Isomorphism", |b| {
        let deal = Deal::random();
        b.iter(|| Isomorphism::from(&deal))
    });
}

fn exhausting_deals(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all 5-card Deals", |b| {
        b.iter(|| Enumerator::deals().count())
    });
}

fn paytable() -> std::sync::Arc<Paytable> {
    Catalog::default()
        .get("jacks-or-better-9-6")
        .expect("built-in paytable")
}

use vpsolver::Arbitrary;
use vpsolver::cards::CanonicalKey;
use vpsolver::cards::Deal;
use vpsolver::cards::Enumerator;
use vpsolver::cards::Isomorphism;
use vpsolver::evaluation::Category;
use vpsolver::evaluation::Game;
use vpsolver::paytable::Catalog;
use vpsolver::paytable::Paytable;
use vpsolver::strategy::Engine;
use vpsolver::strategy::Hold;
