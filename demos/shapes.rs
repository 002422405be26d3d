use std::rc::Rc;

use shapebench::fixtures::{CIRCLE_COLLECTION, RECTANGLE_COLLECTION};
use shapebench::{EventLog, Fixtures, Shape, ShapeEnum};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let square = ShapeEnum::square(4.0);
    println!("{square}: area {} perimeter {}", square.area(), square.perimeter());

    let log = Rc::new(EventLog::new());
    let mut fixtures = Fixtures::new().with_observer(log.clone());

    for name in [RECTANGLE_COLLECTION, CIRCLE_COLLECTION] {
        let shapes = fixtures.shapes(name)?;
        println!("{name}:");
        for shape in shapes.iter() {
            println!("  {}: area {:.2} perimeter {:.2}", **shape, shape.area().raw(), shape.perimeter().raw());
        }
    }

    fixtures.teardown()?;
    println!("{} shapes created, {} released", log.created(), log.dropped());
    Ok(())
}
