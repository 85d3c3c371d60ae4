use criterion::{Criterion, criterion_group, criterion_main};
use resumatch_core::{Candidate, Config, Screener};
use resumatch_text::EnglishModel;
use std::hint::black_box;
use std::sync::Arc;

const JOB: &str = "Senior backend engineer: Python, Django, REST APIs, PostgreSQL, \
                   Docker, Kubernetes, CI/CD pipelines and cloud infrastructure on AWS.";

const SKILLS: &[&str] = &[
    "python", "django", "rest", "api", "docker", "kubernetes", "react", "java", "spring",
    "postgresql", "terraform", "aws", "designed", "managed", "mentoring", "pipelines",
];

fn bench_screen_30_resumes(c: &mut Criterion) {
    let screener = Screener::new(Config::default(), Arc::new(EnglishModel::load(None).unwrap()));

    let candidates: Vec<Candidate> = (0..30)
        .map(|i| {
            let body: Vec<&str> = (0..120).map(|j| SKILLS[(i * 7 + j * 3) % SKILLS.len()]).collect();
            Candidate::new(format!("resume{i}.txt"), body.join(" "))
        })
        .collect();

    c.bench_function("screen_30_resumes", |b| {
        b.iter(|| screener.screen(black_box(JOB), black_box(&candidates)).unwrap());
    });
}

criterion_group!(benches, bench_screen_30_resumes);
criterion_main!(benches);
