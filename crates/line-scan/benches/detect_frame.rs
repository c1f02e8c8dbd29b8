use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use line_scan::{ChannelOrder, FrameView, LineDetector, LineDetectorParams};
use std::hint::black_box;

fn synthetic_frame(width: usize, height: usize) -> Vec<u8> {
    let mut data = vec![220u8; width * height * 3];
    let bars = [width / 5, width / 2, 4 * width / 5];
    for y in 0..height {
        for &x0 in &bars {
            for x in x0..(x0 + width / 32).min(width) {
                let i = (y * width + x) * 3;
                data[i..i + 3].fill(20);
            }
        }
    }
    data
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_frame");
    for &(w, h) in &[(320usize, 240usize), (640, 480), (1280, 720)] {
        let data = synthetic_frame(w, h);
        let frame = FrameView::new(w, h, ChannelOrder::Bgr, &data).expect("frame");
        let detector = LineDetector::new(LineDetectorParams {
            scan_region_position: 1.0,
            ..LineDetectorParams::default()
        })
        .expect("params");

        group.bench_with_input(BenchmarkId::from_parameter(format!("{w}x{h}")), &frame, |b, f| {
            b.iter(|| detector.detect(black_box(f)).expect("detect"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
