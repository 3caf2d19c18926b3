use criterion::{criterion_group, criterion_main, Criterion};
use medio::{Binder, DeclKind, Declaration, Environment, Expr, Format};

/// Environment with `n` documented definitions over a small core.
fn library(n: usize) -> Environment {
    let mut env = Environment::new();
    let nat = || Expr::Const("nat".into());
    let decl = Declaration::new("nat", DeclKind::Constant, Expr::typ()).at("bench/nat.ln", 1);
    env.declare(decl).unwrap();

    for i in 0..n {
        let name = format!("nat.f{}", i);
        let ty = Expr::pi(
            Binder::new("a", nat()),
            Expr::pi(Binder::new("b", nat()), nat()),
        );
        let value = Expr::lam(
            Binder::new("a", nat()),
            Expr::lam(Binder::new("b", nat()), Expr::BVar(1)),
        );
        let d = Declaration::new(name.as_str(), DeclKind::Definition, ty)
            .with_value(value)
            .at("bench/nat.ln", 2 + i);
        env.declare(d).unwrap();
        env.document(name.as_str().into(), "Benchmark filler.");
        let eqn = Expr::Const("eq".into()).apply(vec![nat(), nat()]);
        env.add_equation(name.into(), eqn);
    }
    env
}

/// Layout tree of `n` alternating bracket layers around a leaf.
fn onion(n: usize) -> Format {
    let mut f = Format::text("x");
    for i in 0..n {
        let (open, close) = if i % 2 == 0 { ("(", ")") } else { ("[", "]") };
        f = Format::text(open).then(f.nest(1)).then(Format::text(close));
    }
    f
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let lib = library(1000);
    let f = onion(500);

    c.bench_function("export", |b| b.iter(|| eltiri::export(&lib)));
    c.bench_function("simplify", |b| b.iter(|| eltiri::simplify(f.clone())));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
