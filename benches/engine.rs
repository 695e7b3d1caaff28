use criterion::{black_box, criterion_group, criterion_main, Criterion};
use woodpusher::{attack, legal, movegen, Board, Color, Square};

const BOARDS: [(&'static str, &'static str); 6] = [
    ("initial", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
    (
        "sicilian",
        "r1b1k2r/2qnbppp/p2ppn2/1p4B1/3NPPP1/2N2Q2/PPP4P/2KR1B1R",
    ),
    (
        "middle",
        "1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K",
    ),
    ("open_position", "4r1k1/3R1ppp/8/5P2/p7/6PP/4pK2/1rN1B3"),
    ("queen", "6K1/8/8/1k3q2/3Q4/8/8/8"),
    ("back_rank", "4R1k1/5ppp/8/8/8/8/8/6K1"),
];

fn boards() -> impl Iterator<Item = (&'static str, Board)> {
    BOARDS
        .iter()
        .map(|&(name, fen)| (name, Board::from_fen(fen).unwrap()))
}

fn bench_destinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("destinations");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for sq in Square::iter() {
                    total += movegen::destinations(&board, sq).len();
                }
                black_box(total)
            })
        });
    }
}

fn bench_is_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_check");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(attack::is_check(&board, Color::White));
                black_box(attack::is_check(&board, Color::Black));
            })
        });
    }
}

fn bench_is_mate(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_mate");
    for (name, board) in boards() {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut board = board;
                black_box(legal::is_mate(&mut board, Color::White));
                let mut board_b = board;
                black_box(legal::is_mate(&mut board_b, Color::Black));
            })
        });
    }
}

criterion_group!(benches, bench_destinations, bench_is_check, bench_is_mate);
criterion_main!(benches);
