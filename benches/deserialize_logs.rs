//! Benchmarks for decoding logs.tf responses.
//!
//! Full logs are the largest payloads the API returns; a 6v6 match carries twelve players with
//! per-class and per-weapon breakdowns.
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use logstf_client_sdk::logs::types::{LogById, LogSearchResponse, UploadResponse};
use serde_json::{Value, json};

fn player(index: u32) -> Value {
    json!({
        "team": if index.is_multiple_of(2) { "Red" } else { "Blue" },
        "class_stats": [{
            "type": "scout",
            "kills": 12,
            "assists": 4,
            "deaths": 6,
            "dmg": 4200,
            "weapon": {
                "scattergun": { "kills": 10, "dmg": 3900, "avg_dmg": 48.5, "shots": 0, "hits": 0 },
                "pistol_scout": { "kills": 2, "dmg": 300, "avg_dmg": 12.0, "shots": 0, "hits": 0 }
            },
            "total_time": 1790
        }],
        "kills": 12, "deaths": 6, "assists": 4, "suicides": 0,
        "kapd": "2.7", "kpd": "2.0",
        "dmg": 4200, "dmg_real": 600, "dt": 3800, "dt_real": 250, "hr": 2100,
        "lks": 4, "as": 0, "dapd": 700, "dapm": 140,
        "ubers": 0, "ubertypes": {}, "drops": 0,
        "medkits": 9, "medkits_hp": 420,
        "backstabs": 0, "headshots": 0, "headshots_hit": 0, "sentries": 0,
        "heal": 0, "cpc": 6, "ic": 0
    })
}

fn log(players: u32, rounds: u32) -> String {
    let players_by_id: serde_json::Map<String, Value> = (0..players)
        .map(|i| (format!("[U:1:{}]", 1000 + i), player(i)))
        .collect();
    let names: serde_json::Map<String, Value> = (0..players)
        .map(|i| (format!("[U:1:{}]", 1000 + i), json!(format!("player{i}"))))
        .collect();
    let rounds: Vec<Value> = (0..rounds)
        .map(|i| {
            json!({
                "start_time": 1_700_000_000 + i * 300,
                "winner": "Red",
                "team": {
                    "Red": { "score": 1, "kills": 10, "dmg": 3000, "ubers": 1 },
                    "Blue": { "score": 0, "kills": 7, "dmg": 2500, "ubers": 1 }
                },
                "events": [
                    { "type": "charge", "time": 40, "team": "Red", "steamid": "[U:1:1000]", "medigun": "medigun" },
                    { "type": "pointcap", "time": 60, "team": "Red", "point": 3 },
                    { "type": "round_win", "time": 300, "team": "Red" }
                ],
                "firstcap": "Red",
                "length": 300
            })
        })
        .collect();

    json!({
        "version": 3,
        "teams": {
            "Red": { "score": 2, "kills": 40, "deaths": 35, "dmg": 12000, "charges": 4, "drops": 1, "firstcaps": 3, "caps": 7 },
            "Blue": { "score": 1, "kills": 35, "deaths": 40, "dmg": 11000, "charges": 5, "drops": 0, "firstcaps": 1, "caps": 4 }
        },
        "length": 1800,
        "players": players_by_id,
        "names": names,
        "rounds": rounds,
        "healspread": {},
        "classkills": {},
        "classdeaths": {},
        "classkillassists": {},
        "chat": [{ "steamid": "Console", "name": "Console", "msg": "gg" }],
        "info": {
            "map": "cp_process_final",
            "total_length": 1800,
            "title": "RED vs BLU",
            "date": 1_700_001_800,
            "uploader": { "id": "76561197960287930", "name": "uploader", "info": "TFTrue v4.86" }
        },
        "killstreaks": [],
        "success": true
    })
    .to_string()
}

fn bench_log_by_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("logs/log_by_id");

    for (name, players, rounds) in [("ultiduo", 4, 3), ("6v6", 12, 5), ("highlander", 18, 7)] {
        let json = log(players, rounds);
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &json, |b, json| {
            b.iter(|| {
                let _: LogById =
                    serde_json::from_str(std::hint::black_box(json)).expect("valid log");
            });
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("logs/search");

    let entries: Vec<Value> = (0..1000)
        .map(|i| {
            json!({
                "id": 3_000_000 + i,
                "title": format!("serveme.tf #{i}"),
                "map": "cp_process_final",
                "date": 1_700_000_000 + i,
                "views": i % 50,
                "players": 12
            })
        })
        .collect();
    let json = json!({
        "success": true,
        "results": 1000,
        "total": 3_000_000,
        "parameters": { "player": null, "uploader": null, "title": null, "map": null, "limit": 1000, "offset": 0 },
        "logs": entries
    })
    .to_string();

    group.throughput(Throughput::Bytes(json.len() as u64));
    group.bench_function("page_1000", |b| {
        b.iter(|| {
            let _: LogSearchResponse =
                serde_json::from_str(std::hint::black_box(&json)).expect("valid page");
        });
    });

    group.finish();

    let mut group = c.benchmark_group("logs/upload");
    let upload = r#"{"success":true,"log_id":3456789,"url":"/3456789"}"#;
    group.bench_function("response", |b| {
        b.iter(|| {
            let _: UploadResponse =
                serde_json::from_str(std::hint::black_box(upload)).expect("valid response");
        });
    });

    group.finish();
}

criterion_group!(benches, bench_log_by_id, bench_search);
criterion_main!(benches);
