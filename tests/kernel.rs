use argand::{
    error::EvalError,
    interpreter::value::{Complex, I, ONE, ZERO},
};

fn z(real: f64, imaginary: f64) -> Complex {
    Complex::new(real, imaginary)
}

fn assert_close(actual: Complex, real: f64, imaginary: f64) {
    assert!((actual.real - real).abs() < 1e-10
            && (actual.imaginary - imaginary).abs() < 1e-10,
            "got {actual}, expected {}", z(real, imaginary));
}

#[test]
fn stringify() {
    assert_eq!(z(1.0, 2.0).to_string(), "1+2i");
    assert_eq!(z(1.0, -2.0).to_string(), "1-2i");
    assert_eq!(z(1.0, 0.0).to_string(), "1");
    assert_eq!(z(-1.0, 2.0).to_string(), "-1+2i");
    assert_eq!(z(0.0, 2.0).to_string(), "2i");
    assert_eq!(z(0.0, 0.0).to_string(), "0");
    assert_eq!(z(0.0, -1.0).to_string(), "-i");
    assert_eq!(z(0.0, 1.0).to_string(), "i");
    assert_eq!(z(4.0, -1.0).to_string(), "4-i");
    assert_eq!(z(2.0, 1.0).to_string(), "2+i");
    assert_eq!(z(-0.0, 0.0).to_string(), "0");
    assert_eq!(z(2.0, -0.0).to_string(), "2");
    assert_eq!(z(-0.0, 2.0).to_string(), "2i");
}

#[test]
fn add() {
    assert_eq!((z(1.0, 2.0) + z(4.0, 5.0)).to_string(), "5+7i");
    assert_eq!((z(1.0, 2.0) + z(-4.0, 5.0)).to_string(), "-3+7i");
    assert_eq!((z(1.0, 2.0) + z(4.0, -2.0)).to_string(), "5");
    assert_eq!((z(2.0, 3.0) + z(-2.0, -3.0)).to_string(), "0");
    assert_eq!((z(2.0, 3.0) + z(-2.0, 3.0)).to_string(), "6i");
}

#[test]
fn subtract() {
    assert_eq!((z(1.0, 2.0) - z(4.0, 5.0)).to_string(), "-3-3i");
    assert_eq!((z(1.0, 2.0) - z(-4.0, 5.0)).to_string(), "5-3i");
    assert_eq!((z(1.0, 2.0) - z(4.0, 2.0)).to_string(), "-3");
    assert_eq!((z(2.0, 3.0) - z(2.0, 3.0)).to_string(), "0");
    assert_eq!((z(2.0, 3.0) - z(2.0, -3.0)).to_string(), "6i");
}

#[test]
fn multiply() {
    assert_eq!((z(1.0, 2.0) * z(4.0, 5.0)).to_string(), "-6+13i");
    assert_eq!((z(1.0, 2.0) * z(-4.0, 5.0)).to_string(), "-14-3i");
    assert_eq!((z(1.0, 2.0) * z(4.0, 2.0)).to_string(), "10i");
    assert_eq!((z(2.0, 3.0) * z(2.0, 3.0)).to_string(), "-5+12i");
    assert_eq!((z(2.0, 3.0) * z(2.0, -3.0)).to_string(), "13");
    assert_eq!((z(2.0, 3.0) * ZERO).to_string(), "0");
}

#[test]
fn chained_fold() {
    let sum: Complex = [z(-1.0, 2.0), z(4.0, -2.0), z(2.0, 3.0)].into_iter().sum();
    assert_eq!(sum.to_string(), "5+3i");

    let product: Complex = [z(-1.0, 2.0), z(4.0, -2.0), z(2.0, 3.0)].into_iter().product();
    assert_eq!(product.to_string(), "-30+20i");
}

#[test]
fn addition_and_multiplication_commute() {
    let a = z(1.0, 2.0);
    let b = z(4.0, -5.0);
    assert_eq!(a + b, b + a);
    assert_eq!(a * b, b * a);
}

#[test]
fn negate() {
    assert_eq!((-z(2.0, -3.0)).to_string(), "-2+3i");
}

#[test]
fn divide() {
    assert_eq!(z(4.0, 5.0).divide(z(2.0, 0.0)).unwrap().to_string(),
               "2+2.4999999999999996i");
    assert_eq!(z(4.0, 5.0).divide(z(2.0, 1.0)).unwrap().to_string(), "2.6+1.2i");
    assert_close(z(1.233, 32.43).divide(z(12.14, 2.343)).unwrap(),
                 0.594_966_682_933_073, 2.556_506_842_000_642_7);

    assert_eq!(z(3.0, 0.0).divide(ZERO), Err(EvalError::DivisionByZero));
}

#[test]
fn power() {
    assert_eq!(z(4.0, 0.0).power(z(2.0, 0.0)).unwrap().to_string(), "16");
    assert_eq!(z(2.0, 1.0).power(z(0.0, 0.5)).unwrap().to_string(),
               "0.7297497015314675+0.3105648680121105i");
    assert_eq!(z(3.0, 1.0).power(z(2.0, 0.0)).unwrap().to_string(),
               "8.000000000000002+6.000000000000001i");

    assert_eq!(ZERO.power(ZERO), Err(EvalError::ZeroToTheZero));
}

#[test]
fn roots() {
    let roots = z(16.0, 0.0).root(z(4.0, 0.0)).unwrap();
    assert_eq!(roots.len(), 4);
    assert_eq!(roots[0].to_string(), "2");
    assert_close(roots[1], 0.0, 2.0);
    assert_close(roots[2], -2.0, 0.0);
    assert_close(roots[3], 0.0, -2.0);

    assert_eq!(z(4.0, 0.0).principal_root(z(2.0, 0.0)).unwrap().to_string(), "2");
}

#[test]
fn root_rejects_bad_orders() {
    assert_eq!(z(3.0, 0.0).root(z(0.5, 0.0)),
               Err(EvalError::InvalidRootOrder { order: 0.5 }));
    assert_eq!(z(3.0, 0.0).root(z(1.0, 0.0)),
               Err(EvalError::InvalidRootOrder { order: 1.0 }));
    assert_eq!(z(2.0, 0.0).root(z(3.0, 1.0)), Err(EvalError::ImaginaryRootOrder));
    assert_eq!(ZERO.root(z(4.0, 0.0)), Err(EvalError::ZeroRootBase));
}

#[test]
fn logarithms() {
    assert_eq!(ONE.ln().to_string(), "0");
    assert_eq!(z(4.0, 0.0).log(z(2.0, 0.0)).unwrap().to_string(), "2");
    assert_eq!(ONE.log(z(3.0, 1.0)).unwrap().to_string(), "0");
    assert_eq!(z(std::f64::consts::E, 0.0).log(z(std::f64::consts::E, 0.0))
                                          .unwrap()
                                          .to_string(),
               "1");
}

#[test]
fn magnitude_and_conjugate() {
    assert_eq!(z(3.0, 4.0).abs(), 5.0);
    assert_eq!(z(3.0, 4.0).conj().parts(), (3.0, -4.0));
    assert_eq!(I.arg(), std::f64::consts::FRAC_PI_2);
}

#[test]
fn trigonometric() {
    let w = z(2.0, 1.0);
    assert_close(w.sin(), 1.403_119_250_622_040_5, -0.489_056_259_041_293_7);
    assert_close(w.cos(), -0.642_148_124_715_52, -1.068_607_421_382_778_3);
    assert_close(w.tan().unwrap(), -0.243_458_201_185_725_14, 1.166_736_257_240_92);
    assert_close(w.cot().unwrap(), -0.171_383_612_909_184_94, -0.821_329_797_493_851_7);
    assert_close(w.sec().unwrap(), -0.413_149_344_266_94, 0.687_527_438_655_479);
    assert_close(w.csc().unwrap(), 0.635_493_799_253_9, 0.221_500_930_850_509_45);
}

#[test]
fn inverse_trigonometric() {
    let w = z(2.0, 1.0);
    assert_close(w.asin().unwrap(), 1.063_440_023_577_752_6, 1.469_351_744_368_184_5);
    assert_close(w.acos().unwrap(), 0.507_356_303_217_144, -1.469_351_744_368_184_5);
    assert_close(w.atan(), 1.178_097_245_096_172_4, 0.173_286_795_139_986_4);
    assert_close(w.acot().unwrap(), 0.392_699_081_698_724_14, -0.173_286_795_139_986_3);
    assert_close(w.asec().unwrap(), 1.169_209_935_127_090_4, 0.215_612_418_555_829_8);
    assert_close(w.acsc().unwrap(), 0.401_586_391_667_806_13, -0.215_612_418_555_829_8);
}

#[test]
fn hyperbolic() {
    let w = z(2.0, 1.0);
    assert_close(w.sinh(), 1.959_601_041_421_606_3, 3.165_778_513_216_168);
    assert_close(w.cosh(), 2.032_723_007_019_665_6, 3.051_897_799_151_8);
    assert_close(w.tanh().unwrap(), 1.014_793_616_146_633_8, 0.033_812_826_079_896_635);
    assert_close(w.coth().unwrap(), 0.984_329_226_458_190_9, -0.032_797_755_533_752_526);
    assert_close(w.sech().unwrap(), 0.151_176_298_265_577_24, -0.226_973_675_393_721_57);
    assert_close(w.csch().unwrap(), 0.141_363_021_612_407_8, -0.228_375_065_599_686_54);
}

#[test]
fn inverse_hyperbolic() {
    let w = z(2.0, 1.0);
    assert_close(w.asinh().unwrap(), 1.528_570_919_480_998, 0.427_078_586_392_476_14);
    assert_close(w.acosh().unwrap(), 1.469_351_744_368_185_2, 0.507_356_303_217_144_5);
    assert_close(w.atanh(), 0.402_359_478_108_525_1, 1.338_972_522_294_493_5);
    assert_close(w.acoth().unwrap(), 0.402_359_478_108_525_1, -0.231_823_804_500_403_07);
    assert_close(w.asech().unwrap(), 0.215_612_418_555_829_8, -1.169_209_935_127_090_6);
    assert_close(w.acsch().unwrap(), 0.396_568_230_112_328_9, -0.186_318_054_107_815_54);
}

#[test]
fn equality_is_component_wise() {
    assert_eq!(z(1.0, 2.0), Complex::from((1.0, 2.0)));
    assert_eq!(Complex::from(3.0), z(3.0, 0.0));
    assert_ne!(z(1.0, 2.0), z(1.0, -2.0));
}

#[test]
fn parses_from_source() {
    let value: Complex = "3+i-2i*2".parse().unwrap();
    assert_eq!(value.to_string(), "3-3i");

    let error = "3 / 0".parse::<Complex>().unwrap_err();
    assert_eq!(error.to_string(), "You cannot devide by 0");
}
