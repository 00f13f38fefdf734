use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::RngCore;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::error::CipherResult;

/// Measures mode and padding overhead without any cipher cost.
struct IdentityCipher;

impl SymmetricCipher for IdentityCipher {
    fn name(&self) -> &'static str {
        "IDENTITY"
    }
    fn block_size(&self) -> usize {
        8
    }
    fn encrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        Ok(block.to_vec())
    }
    fn decrypt_block(&self, block: &[u8]) -> CipherResult<Vec<u8>> {
        Ok(block.to_vec())
    }
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

fn bench_modes(c: &mut Criterion) {
    let data = random_bytes(1024 * 1024);
    let mut group = c.benchmark_group("Identity cipher 1MB");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.measurement_time(Duration::from_secs(10));

    for mode in CipherMode::ALL {
        let mut ctx = CipherContext::new(
            Arc::new(IdentityCipher),
            mode,
            PaddingMode::PKCS7,
            Some(vec![0u8; 8]),
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::new("encrypt", mode), &data, |b, data| {
            b.iter(|| ctx.encrypt(data).unwrap())
        });
    }

    group.finish();
}

fn bench_async_ecb(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let data = random_bytes(4 * 1024 * 1024);
    let ctx = CipherContext::new(
        Arc::new(IdentityCipher),
        CipherMode::ECB,
        PaddingMode::PKCS7,
        None,
    )
    .unwrap();

    c.bench_function("ECB async 4MB", |b| {
        b.to_async(&rt).iter(|| {
            let mut ctx = ctx.clone();
            let data = data.clone();
            async move { ctx.encrypt_async(data).await.unwrap() }
        })
    });
}

criterion_group!(benches, bench_modes, bench_async_ecb);
criterion_main!(benches);
