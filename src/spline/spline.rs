use super::mode::*;
use super::enforce::*;
use super::super::bezier::*;
use super::super::coordinate::*;

use itertools::*;

use std::iter;

///
/// An editable spline made up of cubic bezier segments joined end to end
///
/// The control points are kept in a single flat list rather than as separate segment
/// objects: for `k` segments there are `3k+1` points, with the joint for segment `i`
/// at index `3i`, its outgoing tangent handle at `3i+1`, the incoming handle of the
/// next joint at `3i+2` and the next joint at `3i+3`. Neighbouring segments share
/// their joint, so edits on either side of a seam always agree.
///
/// Each joint additionally carries a `ControlPointMode`; every editing operation
/// re-establishes the mode constraints afterwards, so they can be relied upon to
/// hold between calls. A spline can also be marked as looping, in which case the
/// last joint is pinned to the first one (and shares its mode).
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Spline<Point: Coordinate> {
    /// The control points of the spline (3k+1 entries for k segments)
    points: Vec<Point>,

    /// The smoothness constraint for each joint (k+1 entries)
    modes: Vec<ControlPointMode>,

    /// Set to true if the last joint is joined back onto the first
    looped: bool
}

impl<Point: Coordinate> Geo for Spline<Point> {
    type Point = Point;
}

impl<Point: Coordinate> Spline<Point> {
    ///
    /// Creates the default spline: a single unconstrained segment running one unit at
    /// a time along the x axis from the origin
    ///
    pub fn new() -> Spline<Point> {
        let points = (0..4)
            .map(|index| Point::from_components(&[index as f64, 0.0, 0.0]))
            .collect();

        Spline {
            points: points,
            modes:  vec![ControlPointMode::Free, ControlPointMode::Free],
            looped: false
        }
    }

    ///
    /// Creates a spline from a list of control points and a list of joint modes
    ///
    /// The lists must describe at least one segment: `3k+1` points and `k+1` modes for
    /// some `k >= 1`. When `looped` is set, the last joint and mode are forced equal
    /// to the first ones as part of construction.
    ///
    pub fn with_points(points: Vec<Point>, modes: Vec<ControlPointMode>, looped: bool) -> Result<Spline<Point>, SplineError> {
        if points.len() < 4 || points.len() % 3 != 1 || modes.len() != (points.len()-1)/3 + 1 {
            warn!("Cannot build a spline from {} points and {} modes", points.len(), modes.len());
            return Err(SplineError::MalformedControlPoints);
        }

        let mut spline = Spline { points, modes, looped };

        if looped {
            spline.close_loop();
        }

        Ok(spline)
    }

    ///
    /// The number of bezier segments in this spline
    ///
    #[inline]
    pub fn segment_count(&self) -> usize {
        (self.points.len()-1) / 3
    }

    ///
    /// The number of joints in this spline (one more than the number of segments)
    ///
    #[inline]
    pub fn joint_count(&self) -> usize {
        self.modes.len()
    }

    ///
    /// True if the last joint of this spline is pinned to the first one
    ///
    #[inline]
    pub fn is_looped(&self) -> bool {
        self.looped
    }

    ///
    /// The flat list of control points for this spline
    ///
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    ///
    /// The list of joint modes for this spline
    ///
    #[inline]
    pub fn modes(&self) -> &[ControlPointMode] {
        &self.modes
    }

    ///
    /// Retrieves a single control point (panics if the index is out of range)
    ///
    #[inline]
    pub fn control_point(&self, index: usize) -> Point {
        self.points[index]
    }

    ///
    /// Retrieves the mode of a single joint (panics if the joint index is out of range)
    ///
    #[inline]
    pub fn joint_mode(&self, joint: usize) -> ControlPointMode {
        self.modes[joint]
    }

    ///
    /// Moves a control point to a new position
    ///
    /// Moving a joint drags its two tangent handles along by the same offset, so the
    /// shape of the curve around the joint is preserved; moving a handle moves only
    /// that handle. Afterwards the owning joint's mode constraint is re-enforced (for
    /// a handle move this may reposition the handle on the other side of the joint).
    ///
    pub fn set_control_point(&mut self, index: usize, position: Point) {
        if index % 3 == 0 {
            // Joints carry their handles with them
            let delta   = position - self.points[index];
            let last    = self.points.len()-1;

            if self.looped {
                if index == 0 {
                    self.points[1]      = self.points[1] + delta;
                    self.points[last-1] = self.points[last-1] + delta;
                    self.points[last]   = position;
                } else if index == last {
                    self.points[0]      = position;
                    self.points[1]      = self.points[1] + delta;
                    self.points[last-1] = self.points[last-1] + delta;
                } else {
                    self.points[index-1] = self.points[index-1] + delta;
                    self.points[index+1] = self.points[index+1] + delta;
                }
            } else {
                if index > 0 {
                    self.points[index-1] = self.points[index-1] + delta;
                }
                if index < last {
                    self.points[index+1] = self.points[index+1] + delta;
                }
            }
        }

        self.points[index] = position;
        enforce_mode(&mut self.points, &self.modes, self.looped, index);
    }

    ///
    /// Changes the smoothness constraint of a joint and re-enforces it
    ///
    /// On a looping spline the first and last joints share a mode, so changing one
    /// changes the other.
    ///
    pub fn set_joint_mode(&mut self, joint: usize, mode: ControlPointMode) {
        let last_joint      = self.modes.len()-1;
        self.modes[joint]   = mode;

        if self.looped {
            if joint == 0 {
                self.modes[last_joint] = mode;
            } else if joint == last_joint {
                self.modes[0] = mode;
            }
        }

        enforce_mode(&mut self.points, &self.modes, self.looped, joint*3);
    }

    ///
    /// Makes this spline loop back on itself (or stop doing so)
    ///
    /// Turning looping on pins the last joint and its mode to the first joint's,
    /// moving the last joint if necessary. Turning it off leaves the points alone.
    ///
    pub fn set_looped(&mut self, looped: bool) {
        self.looped = looped;

        if looped {
            self.close_loop();
        }
    }

    ///
    /// Appends a new segment to the end of the spline
    ///
    /// The new segment continues one unit along the x axis from the current end
    /// joint, with its handles at the one-third points, and takes over the previous
    /// end joint's mode. Adds exactly 3 control points and 1 mode.
    ///
    pub fn add_segment(&mut self) {
        let end     = self.points[self.points.len()-1];
        let step    = Point::from_components(&[1.0, 0.0, 0.0]);

        self.points.push(end + step*(1.0/3.0));
        self.points.push(end + step*(2.0/3.0));
        self.points.push(end + step);

        let end_mode = self.modes[self.modes.len()-1];
        self.modes.push(end_mode);

        // The old end joint has gained an outgoing handle, which may break its constraint
        let old_end = self.points.len()-4;
        enforce_mode(&mut self.points, &self.modes, self.looped, old_end);

        if self.looped {
            self.close_loop();
        }
    }

    ///
    /// Removes a joint (along with its tangent handles) from the spline
    ///
    /// Interior joints take the two handles either side of them; the end joints take
    /// the two handles on their only side. Removing a joint from a single-segment
    /// spline is rejected, as a spline cannot have fewer than two joints.
    ///
    pub fn remove_joint(&mut self, joint: usize) -> Result<(), SplineError> {
        if self.modes.len() <= 2 {
            warn!("Cannot remove a joint from a single-segment spline");
            return Err(SplineError::LastSegment);
        }

        let last_joint  = self.modes.len()-1;
        let start       = if joint == 0 {
            0
        } else if joint == last_joint {
            self.points.len()-3
        } else {
            joint*3 - 1
        };

        // Removing the mode first bounds-checks the joint index before the points change
        self.modes.remove(joint);
        for _ in 0..3 {
            self.points.remove(start);
        }

        if self.looped {
            self.close_loop();
        } else {
            // The joint now sitting at the seam may have acquired a mismatched handle pair
            let seam = if joint < self.modes.len() { joint } else { self.modes.len()-1 };
            enforce_mode(&mut self.points, &self.modes, false, seam*3);
        }

        Ok(())
    }

    ///
    /// Appends another spline onto the end of this one
    ///
    /// A new pair of tangent handles bridges the gap from this spline's last joint to
    /// the other spline's first joint (initially degenerate, sitting on the joints
    /// themselves), after which the other spline's points and modes are appended
    /// unchanged. A looping spline has no free end, so connecting one is rejected.
    ///
    pub fn connect_to(&mut self, other: &Spline<Point>) -> Result<(), SplineError> {
        if self.looped {
            warn!("Cannot connect another spline to a spline that loops");
            return Err(SplineError::SplineIsLooped);
        }

        let seam_joint  = self.modes.len()-1;
        let end         = self.points[self.points.len()-1];

        self.points.push(end);
        self.points.push(other.points[0]);
        self.points.extend(other.points.iter().cloned());
        self.modes.extend(other.modes.iter().cloned());

        // Both joints at the seam gained a handle. The handles the two splines arrived
        // with are kept as the fixed side of each joint, so the new bridge handles are
        // the ones repositioned by the constraints
        enforce_mode(&mut self.points, &self.modes, false, seam_joint*3);
        enforce_mode(&mut self.points, &self.modes, false, (seam_joint+1)*3 + 1);

        Ok(())
    }

    ///
    /// Splits a segment in two at a position along it, leaving the shape of the
    /// split segment unchanged
    ///
    /// The new joint is created as `Aligned`: the subdivision leaves its two handles
    /// collinear, and aligned joints keep the split point smooth under later edits.
    /// The subdivision also shortens the handles on the inside of the two bounding
    /// joints, so their modes are re-enforced: a `Mirrored` joint next to the split
    /// pulls its opposite handle in to match, adjusting the neighbouring segment.
    ///
    pub fn split_segment(&mut self, segment: usize, t: f64) -> Result<(), SplineError> {
        if t <= 0.0 || t >= 1.0 {
            warn!("Cannot split a segment at or beyond its end points");
            return Err(SplineError::DegenerateSplit);
        }

        let index           = segment*3;
        let (first, second) = subdivide4(t, self.points[index], self.points[index+1], self.points[index+2], self.points[index+3]);

        // The first sub-curve replaces the original handles, the second is inserted
        // after it (its end point is the original end joint, which stays where it is)
        self.points[index+1] = first.1;
        self.points[index+2] = first.2;
        self.points.insert(index+3, second.2);
        self.points.insert(index+3, second.1);
        self.points.insert(index+3, first.3);

        self.modes.insert(segment+1, ControlPointMode::Aligned);

        // The subdivision rescaled the inner handles of both bounding joints, so their
        // constraints need re-enforcing (their outer handles follow the rescaled ones)
        enforce_mode(&mut self.points, &self.modes, self.looped, index+1);
        enforce_mode(&mut self.points, &self.modes, self.looped, index+5);

        Ok(())
    }

    ///
    /// Translates the whole spline so that the joint at the chosen end lands on `target`
    ///
    /// Useful for re-anchoring a spline, for example when chaining copies of a curve
    /// one after another.
    ///
    pub fn move_to(&mut self, target: Point, end: SplineEnd) {
        let anchor = match end {
            SplineEnd::Start    => self.points[0],
            SplineEnd::End      => self.points[self.points.len()-1]
        };
        let offset = target - anchor;

        for point in self.points.iter_mut() {
            *point = *point + offset;
        }
    }

    ///
    /// Given a position along the whole spline (0 to 1), returns the point on the
    /// spline at that position
    ///
    /// Values outside the 0 to 1 range are clamped to the nearest end of the spline.
    ///
    pub fn point_at_pos(&self, t: f64) -> Point {
        let (segment, t)    = self.segment_for_pos(t);
        let index           = segment*3;

        basis(t, self.points[index], self.points[index+1], self.points[index+2], self.points[index+3])
    }

    ///
    /// Given a position along the whole spline (0 to 1), returns the tangent
    /// (unnormalized derivative) of the segment at that position
    ///
    pub fn tangent_at_pos(&self, t: f64) -> Point {
        let (segment, t)    = self.segment_for_pos(t);
        let index           = segment*3;

        tangent(t, self.points[index], self.points[index+1], self.points[index+2], self.points[index+3])
    }

    ///
    /// Given a point on (or very close to) the spline, finds the position along the
    /// spline where that point can be found
    ///
    pub fn t_for_point(&self, point: &Point) -> Option<f64> {
        let num_segments = self.segment_count() as f64;

        for (segment, curve) in self.curves().enumerate() {
            if let Some(t) = curve.t_for_point(point) {
                return Some(((segment as f64) + t) / num_segments);
            }
        }

        None
    }

    ///
    /// Returns the segments of this spline as a series of bezier curves
    ///
    pub fn curves<'a>(&'a self) -> impl 'a+Iterator<Item=Curve<Point>> {
        let start_point = self.points[0];

        iter::once((start_point, start_point, start_point))
            .chain(self.points[1..].chunks(3).map(|hull| (hull[0], hull[1], hull[2])))
            .tuple_windows()
            .map(|((_, _, start_point), (cp1, cp2, end_point))| Curve::from_points(start_point, (cp1, cp2), end_point))
    }

    ///
    /// Finds the axis-aligned bounds of the whole spline
    ///
    pub fn bounding_box<Bounds: BoundingBox<Point=Point>>(&self) -> Bounds {
        self.curves()
            .map(|curve| curve.bounding_box::<Bounds>())
            .map(|bounds| (bounds.min(), bounds.max()))
            .fold1(|(min1, max1), (min2, max2)| (Point::from_smallest_components(min1, min2), Point::from_biggest_components(max1, max2)))
            .map(|(min, max)| Bounds::from_min_max(min, max))
            .unwrap_or_else(|| Bounds::empty())
    }

    ///
    /// Attempts to estimate the length of the whole spline
    ///
    pub fn estimate_length(&self) -> f64 {
        self.curves()
            .map(|curve| curve.estimate_length(1.0))
            .sum()
    }

    ///
    /// Maps a position along the whole spline to a segment index and a position
    /// within that segment (clamping out of range positions, and picking the final
    /// segment for t = 1)
    ///
    fn segment_for_pos(&self, t: f64) -> (usize, f64) {
        let num_segments = self.segment_count();

        if t <= 0.0 {
            (0, 0.0)
        } else if t >= 1.0 {
            (num_segments-1, 1.0)
        } else {
            let scaled  = t * (num_segments as f64);
            let segment = scaled.floor() as usize;
            let segment = if segment >= num_segments { num_segments-1 } else { segment };

            (segment, scaled - (segment as f64))
        }
    }

    ///
    /// Re-establishes the loop equalities (last joint and mode pinned to the first)
    /// and re-enforces the shared joint
    ///
    fn close_loop(&mut self) {
        let last        = self.points.len()-1;
        let last_joint  = self.modes.len()-1;

        self.points[last]       = self.points[0];
        self.modes[last_joint]  = self.modes[0];

        enforce_mode(&mut self.points, &self.modes, true, 0);
    }
}
