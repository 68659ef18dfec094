use dauer::{convert, format_text, parse, Duration, FormatOptions};

fn main() -> dauer::Result<()> {
    env_logger::builder()
        .filter_module("dauer", log::LevelFilter::Trace)
        .parse_default_env()
        .init();

    for expr in ["1m", "1.5h", "1d 2h 3m 4s", "100", "-.5 hr", "☃"] {
        log::info!("{expr:?} => {}", parse(expr));
    }

    {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let long = FormatOptions::new().long(true);

        for _ in 0..5 {
            let ms = rng.gen_range(0.0..Duration::years(1.0));
            log::info!("{ms} => {:?}", format_text(ms, &long));
        }
    }

    let out = convert("1d 2h", None)?;
    log::info!("convert(\"1d 2h\") => {out:?}");

    let out = convert(93_784_000, Some(&FormatOptions::new().compact(true)))?;
    log::info!("convert(93784000) => {out:?}");

    Ok(())
}
