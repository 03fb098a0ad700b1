use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tetraview::bench::{BarycentricRasterizer, FlatShader, FrameBuffer, ScreenTriangle};
use tetraview::colors::Rgb;
use tetraview::math::vec3::Vec3;
use tetraview::{render, Scene};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_buffers() -> (Vec<u32>, Vec<f64>) {
    let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
    (vec![0u32; size], vec![f64::NEG_INFINITY; size])
}

fn small_triangle() -> ScreenTriangle {
    ScreenTriangle::new([
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(120.0, 100.0, 0.0),
        Vec3::new(110.0, 120.0, 0.0),
    ])
}

fn medium_triangle() -> ScreenTriangle {
    ScreenTriangle::new([
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(300.0, 100.0, 0.0),
        Vec3::new(200.0, 300.0, 0.0),
    ])
}

fn large_triangle() -> ScreenTriangle {
    ScreenTriangle::new([
        Vec3::new(50.0, 50.0, 0.0),
        Vec3::new(750.0, 100.0, 0.0),
        Vec3::new(400.0, 550.0, 0.0),
    ])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let rasterizer = BarycentricRasterizer::new();
    let shader = FlatShader::new(Rgb::RED);

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("barycentric", name), &triangle, |b, tri| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                // Reset depth so every iteration passes the depth test
                depth.fill(f64::NEG_INFINITY);
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                rasterizer.fill_triangle(black_box(tri), &mut fb, &shader)
            });
        });
    }

    group.finish();
}

fn benchmark_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");
    let scene = Scene::tetrahedron();

    for (width, height) in [(400u32, 400u32), (800, 600), (1920, 1080)] {
        group.bench_with_input(
            BenchmarkId::new("tetrahedron", format!("{width}x{height}")),
            &(width, height),
            |b, &(w, h)| {
                b.iter(|| render(&scene, black_box(137.0), black_box(-23.0), w, h));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_full_frame);
criterion_main!(benches);
