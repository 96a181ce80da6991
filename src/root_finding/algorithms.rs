//! Root-finding algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum along with the per-method defaults 
//! (iteration cap, step tolerance, denominator guard).


/// Additive guard applied to every update denominator unless overridden. 
///
/// Keeps a zero derivative (or a zero secant slope) from producing a 
/// division by zero, at the cost of biasing the step slightly when the 
/// true denominator is small.
pub const DEFAULT_GUARD: f64 = 1e-4; 


/// Root-finding algorithm variants. 
/// - [`Algorithm::Newton`] : tangent-line update with an exact or numeric derivative 
/// - [`Algorithm::Secant`] : two-point difference quotient in place of a derivative 
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm { 
    Newton, 
    Secant, 
}

impl Algorithm { 
    /// Default iteration count if `max_iter` is unset in config. 
    pub const fn default_max_iter(self) -> usize { 
        match self { 
            Algorithm::Newton => 20, 
            Algorithm::Secant => 20, 
        }
    }

    /// Default stopping threshold on successive iterates.
    ///
    /// # Notes 
    /// - Newton compares the *squared* step, `(w_old - w)^2 > 1e-4`. 
    /// - Secant compares the *absolute* step, `|w1 - w2| > 1e-5`. 
    ///   The tighter secant value is intentional. 
    pub const fn default_step_tol(self) -> f64 { 
        match self { 
            Algorithm::Newton => 1e-4, 
            Algorithm::Secant => 1e-5, 
        }
    }

    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Newton => "newton", 
            Algorithm::Secant => "secant", 
        }
    }

    /// Number of seed points placed in the history before the first update. 
    pub const fn seed_len(self) -> usize { 
        match self { 
            Algorithm::Newton => 1, 
            Algorithm::Secant => 2, 
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
