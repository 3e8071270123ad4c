use clap::{App, Arg};
use pbr::ProgressBar;
use rays::scenes;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::{thread, time};

fn main() {
    let arg_matches = App::new("rays")
        .version("0.1.0")
        .about("Whitted-style ray tracer")
        .arg(
            Arg::new("resolution")
                .long("resolution")
                .short('r')
                .takes_value(true)
                .default_value("800x600")
                .help("output resolution in pixels"),
        )
        .arg(
            Arg::new("scene")
                .long("scene")
                .short('s')
                .takes_value(true)
                .default_value("cover")
                .help("scene to render (cover, default)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .takes_value(true)
                .default_value("o.ppm")
                .help("output file; .ppm writes text PPM, anything else goes through the image crate"),
        )
        .get_matches();

    let (w, h) = match parse_resolution(arg_matches.value_of("resolution")) {
        Some(v) => v,
        None => {
            eprintln!("invalid resolution");
            return;
        }
    };
    let scene_name = arg_matches.value_of("scene").unwrap_or("cover");
    let output = arg_matches.value_of("output").unwrap_or("o.ppm").to_string();

    let (world, camera) = match scenes::by_name(scene_name, w, h) {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            eprintln!("scene setup failed: {}", e);
            return;
        }
        None => {
            eprintln!("unknown scene {:?}", scene_name);
            return;
        }
    };

    eprintln!("Rendering {} x {} image of scene {:?}.", w, h, scene_name);

    let pxcount = Arc::new(AtomicUsize::new(0));
    let ui_pxcount = Arc::clone(&pxcount);
    let ui_thread = thread::Builder::new()
        .name("ui".to_string())
        .spawn(move || {
            let t = w * h;
            let mut pb = ProgressBar::new(t as u64);
            loop {
                let x = ui_pxcount.load(Ordering::Relaxed);
                pb.set(x as u64);
                thread::sleep(time::Duration::from_millis(250));
                if x >= t {
                    break;
                }
            }
        })
        .unwrap();

    let image = camera.render_parallel(&world, &pxcount);
    ui_thread.join().unwrap();

    let result = if output.ends_with(".ppm") {
        fs::write(&output, image.to_ppm())
    } else {
        image::save_buffer(
            &output,
            &image.to_rgb8(),
            w as u32,
            h as u32,
            image::ColorType::Rgb8,
        )
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    };
    match result {
        Ok(()) => eprintln!("Wrote {}.", output),
        Err(e) => eprintln!("failed to write {}: {}", output, e),
    }
}

fn parse_resolution(s: Option<&str>) -> Option<(usize, usize)> {
    let v: Vec<&str> = s?.split('x').collect();
    if v.len() != 2 {
        return None;
    }
    let w = v[0].parse::<usize>().ok()?;
    let h = v[1].parse::<usize>().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}
