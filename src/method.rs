use opencv::imgproc;

/// One of OpenCV's built-in template comparison methods.
///
/// The squared-difference variants score by distance (lower is better);
/// every other variant scores by correlation (higher is better). The
/// distinction matters when reading a score surface: see
/// [`Method::prefers_minimum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    CorrelationCoefficient,
    CorrelationCoefficientNormed,
    CrossCorrelation,
    CrossCorrelationNormed,
    SquaredDifference,
    SquaredDifferenceNormed,
}

impl Method {
    /// Every comparison method, in the order the demo walks them.
    pub const ALL: [Method; 6] = [
        Method::CorrelationCoefficient,
        Method::CorrelationCoefficientNormed,
        Method::CrossCorrelation,
        Method::CrossCorrelationNormed,
        Method::SquaredDifference,
        Method::SquaredDifferenceNormed,
    ];

    /// The `imgproc::TM_*` constant handed to `match_template`.
    pub fn to_opencv(self) -> i32 {
        match self {
            Method::CorrelationCoefficient => imgproc::TM_CCOEFF,
            Method::CorrelationCoefficientNormed => imgproc::TM_CCOEFF_NORMED,
            Method::CrossCorrelation => imgproc::TM_CCORR,
            Method::CrossCorrelationNormed => imgproc::TM_CCORR_NORMED,
            Method::SquaredDifference => imgproc::TM_SQDIFF,
            Method::SquaredDifferenceNormed => imgproc::TM_SQDIFF_NORMED,
        }
    }

    /// The OpenCV identifier, used for window titles and log lines.
    pub fn label(self) -> &'static str {
        match self {
            Method::CorrelationCoefficient => "TM_CCOEFF",
            Method::CorrelationCoefficientNormed => "TM_CCOEFF_NORMED",
            Method::CrossCorrelation => "TM_CCORR",
            Method::CrossCorrelationNormed => "TM_CCORR_NORMED",
            Method::SquaredDifference => "TM_SQDIFF",
            Method::SquaredDifferenceNormed => "TM_SQDIFF_NORMED",
        }
    }

    /// Whether the best match sits at the score surface's minimum rather
    /// than its maximum.
    pub fn prefers_minimum(self) -> bool {
        matches!(
            self,
            Method::SquaredDifference | Method::SquaredDifferenceNormed
        )
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
