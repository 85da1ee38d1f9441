use anyhow::Result;
use rand::Rng;

use numvec::{join, Fill, Vector, VectorError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn random_sizes() {
    init_logger();
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let n: usize = rng.gen_range(1, 256);
        let mut v = Vector::new(n);
        assert_eq!(n, v.size());
        assert_eq!(n, v.value().len());
        assert_eq!(Some(1.), v.get(0));
        assert!(v.iter().skip(1).all(|x| x == 0.));
        v.zero();
        assert_eq!(n, v.value().len());
        assert!(v.iter().all(|x| x == 0.));
    }
}

#[test]
fn set_and_get() -> Result<()> {
    init_logger();
    let mut rng = rand::thread_rng();
    let mut v = Vector::new(16);
    for _ in 0..100 {
        let i: usize = rng.gen_range(0, 16);
        let x: f64 = rng.gen();
        v.set(i)(x);
        assert_eq!(x, v.try_get(i)?);
        v.set_at(i, -x)?;
        assert_eq!(Some(-x), v.get(i));
    }
    Ok(())
}

#[test]
fn checked_access_past_end() {
    init_logger();
    let mut v = Vector::new(4);
    match v.set_at(4, 1.) {
        Err(VectorError::IndexOutOfRange { index: 4, size: 4 }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(v.try_get(10).is_err());
    v.set(4)(1.);
    assert_eq!(4, v.value().len());
}

#[test]
fn clone_then_copy() -> Result<()> {
    init_logger();
    let original = Vector::new([3., 2., 4.]);
    let mut copy = original.clone();
    copy.map(|x, _, _| x * 2.);
    assert_eq!(&[3., 2., 4.], original.value());
    copy.copy(&original);
    assert_eq!(original, copy);
    copy.set_at(1, 7.)?;
    assert_eq!(Some(2.), original.get(1));
    Ok(())
}

#[test]
fn join_sizes() {
    init_logger();
    let a = Vector::new(3);
    let b = Vector::new([5., 6.]);
    let joined = join(&a, &b);
    assert_eq!(a.size() + b.size(), joined.size());
    assert_eq!(&[1., 0., 0., 5., 6.], joined.value());
}

#[test]
fn map_skips_unchanged() {
    init_logger();
    let mut v = Vector::new([1., 2., 3., 4.]);
    v.map(|x, i, _| if i % 2 == 0 { Some(-x) } else { None });
    assert_eq!(&[-1., 2., -3., 4.], v.value());
}

#[test]
fn chained_fill_and_reset() {
    init_logger();
    let mut v = Vector::new(4);
    let mut next = 0.;
    v.fill(Fill::with(|| {
        next += 0.5;
        next
    }));
    assert_eq!("[0.5, 1, 1.5, 2]", v.to_string());
    v.reset().reset();
    assert_eq!("[1, 0, 0, 0]", v.to_string());
}
