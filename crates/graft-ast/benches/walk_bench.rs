// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Performance benchmarks for the rewriting walker.
//!
//! Run with:
//! ```bash
//! cargo bench -p graft-ast
//! ```
//!
//! # Benchmark Categories
//!
//! 1. **Identity**: walk cost with a visitor that changes nothing
//! 2. **Rewrite**: walk cost with renames and deletions applied

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use graft_ast::{
    walk, BasicLit, BinaryExpr, BinaryOp, BlockStmt, Declaration, ExprStmt, Expression, File,
    FuncDecl, FuncType, Handle, Ident, Node, NodeKind, Rewriter, Statement,
};

// =============================================================================
// Test Data Generation
// =============================================================================

/// Builds a file with `num_funcs` functions, each holding a handful of
/// expression statements.
fn generate_file(num_funcs: usize) -> File {
    let decls = (0..num_funcs)
        .map(|i| {
            let stmts = (0..8)
                .map(|j| {
                    Statement::Expr(ExprStmt {
                        expr: Expression::Binary(Box::new(BinaryExpr {
                            left: Ident::new(format!("var_{i}_{j}")).into(),
                            op: BinaryOp::Add,
                            right: BasicLit::int(j as i64).into(),
                        })),
                    })
                })
                .collect();
            Declaration::Func(Box::new(FuncDecl {
                doc: None,
                recv: None,
                name: Ident::new(format!("func_{i}")),
                ty: FuncType {
                    params: None,
                    results: None,
                },
                body: Some(BlockStmt::new(stmts)),
            }))
        })
        .collect();
    File {
        doc: None,
        name: Ident::new("bench"),
        decls,
    }
}

struct Identity;

impl Rewriter for Identity {
    fn rewrite<'p>(&mut self, handle: Handle<'p>) -> Handle<'p> {
        handle
    }
}

/// Renames every identifier and deletes every other function.
struct Churn;

impl Rewriter for Churn {
    fn rewrite<'p>(&mut self, mut handle: Handle<'p>) -> Handle<'p> {
        let delete = match handle.current() {
            Some(Node::Decl(Declaration::Func(func))) => {
                func.name.name.ends_with('0') || func.name.name.ends_with('5')
            }
            _ => false,
        };
        if delete {
            return handle.delete();
        }
        if let Some(Node::Expr(Expression::Ident(ident))) = handle.current_mut() {
            ident.name.push('_');
        }
        handle
    }
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_identity_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity_walk");
    for num_funcs in [10, 100, 500] {
        let file = generate_file(num_funcs);
        group.throughput(Throughput::Elements(num_funcs as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_funcs),
            &file,
            |b, file| {
                b.iter_batched(
                    || file.clone(),
                    |file| {
                        let result = walk(Node::File(file), &mut Identity)
                            .expect("identity walk never faults");
                        black_box(result)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_rewrite_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite_walk");
    for num_funcs in [10, 100, 500] {
        let file = generate_file(num_funcs);
        group.throughput(Throughput::Elements(num_funcs as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_funcs),
            &file,
            |b, file| {
                b.iter_batched(
                    || file.clone(),
                    |file| {
                        let result =
                            walk(Node::File(file), &mut Churn).expect("rewrite walk never faults");
                        assert_eq!(result.as_ref().map(Node::kind), Some(NodeKind::File));
                        black_box(result)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_identity_walk, bench_rewrite_walk);
criterion_main!(benches);
