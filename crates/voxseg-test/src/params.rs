//! Regression test parameters and comparisons

use voxseg_core::{BoundingBox, Volume, Voxel};

/// Regression test parameters
///
/// Tracks the test name, a running comparison index and the overall success
/// status. Each `compare_*` call increments the index so that a failure
/// report names the exact check that failed.
pub struct RegParams {
    /// Name of the test (e.g., "extract")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "extract")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two volumes for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the extents and every voxel match, `false` otherwise.
    pub fn compare_volumes<V: Voxel>(&mut self, expected: &Volume<V>, actual: &Volume<V>) -> bool {
        self.index += 1;

        if expected.extent() != actual.extent() {
            let msg = format!(
                "Failure in {}_reg: volume comparison for index {} - extent mismatch {} vs {}",
                self.test_name,
                self.index,
                expected.extent(),
                actual.extent()
            );
            self.record_failure(msg);
            return false;
        }

        let mismatch = expected
            .extent()
            .iter_points()
            .find(|&p| expected.get_point(p) != actual.get_point(p));

        match mismatch {
            Some(p) => {
                let msg = format!(
                    "Failure in {}_reg: volume comparison for index {} - voxel mismatch at ({}, {}, {}): expected {:?}, got {:?}",
                    self.test_name,
                    self.index,
                    p.x,
                    p.y,
                    p.z,
                    expected.get_point(p),
                    actual.get_point(p)
                );
                self.record_failure(msg);
                false
            }
            None => true,
        }
    }

    /// Compare two bounding boxes for equality
    pub fn compare_boxes(&mut self, expected: &BoundingBox, actual: &BoundingBox) -> bool {
        self.index += 1;

        if expected != actual {
            let msg = format!(
                "Failure in {}_reg: box comparison for index {}\n\
                 expected = {:?}, actual = {:?}",
                self.test_name, self.index, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Record a boolean check
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.record_failure(msg);
        }
        condition
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
