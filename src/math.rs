//! Vector arithmetic.
//!
//! These operations are part of the public interface but do not compute anything yet:
//! every function accepts its operands and leaves them untouched.

use crate::Vector;

pub fn add(_a: &Vector, _b: &Vector) {
    debug!("add is not implemented");
}

pub fn sub(_a: &Vector, _b: &Vector) {
    debug!("sub is not implemented");
}

pub fn cross(_a: &Vector, _b: &Vector) {
    debug!("cross is not implemented");
}

pub fn product(_a: &Vector, _b: &Vector) {
    debug!("product is not implemented");
}

/// Instance forms of the operations above. They leave `self` unchanged.
impl Vector {
    pub fn add(&mut self, other: &Vector) {
        add(self, other)
    }

    pub fn sub(&mut self, other: &Vector) {
        sub(self, other)
    }

    pub fn cross(&mut self, other: &Vector) {
        cross(self, other)
    }

    pub fn product(&mut self, other: &Vector) {
        product(self, other)
    }

    pub fn pow(&mut self, _exponent: f64) {
        debug!("pow is not implemented");
    }
}

#[cfg(test)]
mod tests {
    use crate::math;
    use crate::Vector;

    #[test]
    fn instance_operations_leave_values() {
        let mut a = Vector::new([1., 2., 3.]);
        let b = Vector::new([4., 5., 6.]);
        a.add(&b);
        a.sub(&b);
        a.cross(&b);
        a.product(&b);
        a.pow(2.);
        assert_eq!(&[1., 2., 3.], a.value());
        assert_eq!(&[4., 5., 6.], b.value());
    }

    #[test]
    fn module_operations_leave_values() {
        let a = Vector::new(3);
        let b = Vector::new(2);
        math::add(&a, &b);
        math::sub(&a, &b);
        math::cross(&a, &b);
        math::product(&a, &b);
        assert_eq!(Vector::new(3), a);
        assert_eq!(Vector::new(2), b);
    }
}
