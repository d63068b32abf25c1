//! Performance benchmarks for petmatch-skill
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, Criterion};
use petmatch_skill::{RecommendationTable, RequestEnvelope, Skill, SkillConfig};

fn recommendation_json() -> String {
    let slot = |name: &str, value: &str| {
        serde_json::json!({
            "name": name,
            "value": value,
            "resolutions": { "resolutionsPerAuthority": [{
                "status": { "code": "ER_SUCCESS_MATCH" },
                "values": [{ "value": { "name": value, "id": value } }]
            }]}
        })
    };
    serde_json::json!({
        "request": {
            "type": "Dialog.API.Invoked",
            "apiRequest": {
                "name": "getRecommendation",
                "arguments": { "energy": "high", "size": "small", "temperament": "friendly" },
                "slots": {
                    "energy": slot("energy", "high"),
                    "size": slot("size", "small"),
                    "temperament": slot("temperament", "friendly")
                }
            }
        }
    })
    .to_string()
}

fn bench_table(c: &mut Criterion) {
    c.bench_function("RecommendationTable::builtin", |b| {
        b.iter(|| RecommendationTable::builtin().unwrap());
    });

    let table = RecommendationTable::builtin().unwrap();
    c.bench_function("RecommendationTable lookup", |b| {
        b.iter(|| table.lookup("high", "small", "friendly"));
    });
}

fn bench_envelope_parse(c: &mut Criterion) {
    let json = recommendation_json();
    c.bench_function("RequestEnvelope deserialize", |b| {
        b.iter(|| serde_json::from_str::<RequestEnvelope>(&json).unwrap());
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let skill = Skill::from_config(&SkillConfig::default()).unwrap();
    let envelope: RequestEnvelope = serde_json::from_str(&recommendation_json()).unwrap();

    c.bench_function("Skill dispatch getRecommendation", |b| {
        b.to_async(&rt).iter(|| async { skill.dispatch(&envelope).await.unwrap() });
    });

    let json = recommendation_json();
    c.bench_function("Skill invoke_json getRecommendation", |b| {
        b.to_async(&rt).iter(|| async { skill.invoke_json(&json).await.unwrap() });
    });
}

criterion_group!(benches, bench_table, bench_envelope_parse, bench_dispatch);
criterion_main!(benches);
