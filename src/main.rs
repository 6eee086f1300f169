use std::error::Error;
use std::f64::consts::PI;

use tracing::info;
use tracing_subscriber::{
    EnvFilter,
    layer::SubscriberExt,
    util::SubscriberInitExt
};

use tabfun::configuration::Configuration;
use tabfun::function::functionpoint::FunctionPoint;
use tabfun::function::integration::integrate;
use tabfun::function::scalarfunction::ScalarFunction;
use tabfun::reflection::typedescriptor::TypeDescriptor;
use tabfun::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use tabfun::tabulated::tabulatedfunctionfactory::LinkedListTabulatedFunctionFactory;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Configuration::new();
    if let Some(config_path) = std::env::args().nth(1) {
        config.from_reader(&config_path)?;
        info!(path = %config_path, "configuration read");
    }

    let mut provider = config.tabulated_functions();
    let cos = ScalarFunction::new(0.0, PI, f64::cos)?;
    let tabulated_cos = provider.tabulate(&cos, 0.0, PI, 11)?;
    println!("{}: {}", tabulated_cos.kind(), tabulated_cos.as_ref());
    for point in tabulated_cos.iter() {
        println!("    {}", point);
    }

    provider.set_factory(Box::new(LinkedListTabulatedFunctionFactory));
    let mut cubic = provider.create_from_points(&[
        FunctionPoint::new(0.0, 0.0),
        FunctionPoint::new(1.0, 1.0),
        FunctionPoint::new(2.0, 8.0)
    ])?;
    println!("{}: {}", cubic.kind(), cubic.as_ref());
    println!("f(0.5) = {}, f(1.5) = {}, f(3) = {}", cubic.value(0.5), cubic.value(1.5), cubic.value(3.0));

    cubic.add_point(FunctionPoint::new(1.5, 3.375))?;
    if let Err(error) = cubic.add_point(FunctionPoint::new(1.5, 0.0)) {
        println!("add_point refused: {}", error);
    }
    println!("after insertion: {}", cubic.as_ref());

    let mut bytes = Vec::new();
    provider.output_tabulated_function(cubic.as_ref(), &mut bytes)?;
    let restored = config.tabulated_functions().input_tabulated_function(&mut bytes.as_slice())?;
    println!("binary round trip as {}: equal = {}", restored.kind(), *restored == *cubic);

    let mut text = Vec::new();
    provider.write_tabulated_function(cubic.as_ref(), &mut text)?;
    println!("text form: {}", String::from_utf8_lossy(&text));

    let registry = config.type_registry();
    let dynamic = registry.create_from_count(&TypeDescriptor::of::<LinkedListTabulatedFunction>(), 0.0, 10.0, 6)?;
    println!("dynamically built {}: {}", dynamic.kind(), dynamic.as_ref());
    if let Err(error) = registry.create_from_count(&TypeDescriptor::of::<FunctionPoint>(), 0.0, 1.0, 2) {
        println!("dynamic construction refused: {}", error);
    }

    let integral = integrate(tabulated_cos.as_ref(), 0.0, PI / 2.0, 1e-3)?;
    println!("integral of tabulated cos over [0, pi/2] = {}", integral);
    info!(points = cubic.points_count(), "demo finished");
    Ok(())
}
