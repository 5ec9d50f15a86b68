use std::{
    fmt::{self, Debug},
    str::FromStr,
};

use num_traits::Float;
use tracing::debug;

use crate::{
    Error, Orientation, Polygon, Result, Style, Styles,
    text::{CRLF, Lines},
};

/// The part a polygon plays in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The outer boundary of the polygon being clipped.
    Subject,
    /// The optional hole of the subject polygon.
    Hole,
    /// The polygon clipping the subject.
    Clip,
}

impl Role {
    /// Returns the orientation polygons playing this role are built with.
    pub fn orientation(self) -> Orientation {
        match self {
            Role::Subject | Role::Clip => Orientation::CounterClockwise,
            Role::Hole => Role::Subject.orientation().reversed(),
        }
    }

    /// Returns the style polygons playing this role are presented with by default.
    pub fn default_style(self) -> Style {
        Styles::default().of(self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Subject => write!(f, "subject"),
            Role::Hole => write!(f, "hole"),
            Role::Clip => write!(f, "clip"),
        }
    }
}

/// The operands of a clipping exercise: a subject polygon, optionally with a hole, and a clip
/// polygon, all of them drawn on a canvas of a given size.
///
/// Its textual representation is:
///
/// ```text
/// width height
/// k              // amount of subject contours: 1, or 2 if there is a hole
/// n              // amount of points of the outer subject contour
/// x y            // n times
/// [n, x y ...]   // the hole, if k = 2
/// 1              // amount of clip contours
/// n              // amount of points of the clip contour
/// x y            // n times
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<T = f64> {
    /// The width of the canvas, in pixels.
    pub width: u32,
    /// The height of the canvas, in pixels.
    pub height: u32,
    pub subject: Polygon<T>,
    pub hole: Option<Polygon<T>>,
    pub clip: Polygon<T>,
    /// How the polygons are presented, not part of the textual representation.
    pub styles: Styles,
}

impl<T> Scene<T> {
    /// Returns a scene with no polygons on a canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            subject: Polygon::new(Role::Subject.orientation()),
            hole: None,
            clip: Polygon::new(Role::Clip.orientation()),
            styles: Styles::default(),
        }
    }

    /// Returns an iterator over all the polygons in the scene together with their role.
    pub fn contours(&self) -> impl Iterator<Item = (Role, &Polygon<T>)> {
        [(Role::Subject, Some(&self.subject))]
            .into_iter()
            .chain([(Role::Hole, self.hole.as_ref())])
            .chain([(Role::Clip, Some(&self.clip))])
            .filter_map(|(role, polygon)| polygon.map(|polygon| (role, polygon)))
    }
}

impl<T> Scene<T>
where
    T: Float + Debug,
{
    /// Succeeds if, and only if, every polygon in the scene is simple and the hole, if any, lies
    /// inside the subject polygon.
    pub fn validate(&self) -> Result<()> {
        self.contours()
            .try_for_each(|(role, polygon)| {
                if polygon.len() < 3 {
                    return Err(Error::TooFewPoints {
                        role,
                        count: polygon.len(),
                    });
                }

                if !polygon.is_simple() {
                    return Err(Error::NotSimple(role));
                }

                Ok(())
            })
            .and_then(|_| match &self.hole {
                Some(hole) if !self.subject.encloses(hole) => Err(Error::HoleNotNested),
                _ => Ok(()),
            })
            .inspect_err(|error| debug!(%error, "invalid scene"))
    }
}

impl<T> FromStr for Scene<T>
where
    T: Float,
{
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut lines = Lines::new(text);

        let (line, [width, height]) = lines.integers::<2>("canvas width and height")?;
        if width < 0 || height < 0 {
            return Err(Error::NegativeDimension { width, height });
        }

        let (width, height) = u32::try_from(width)
            .ok()
            .zip(u32::try_from(height).ok())
            .ok_or_else(|| Error::Malformed {
                line,
                expected: "canvas width and height",
                found: format!("{width} {height}"),
            })?;

        let (line, [count]) = lines.integers::<1>("amount of subject contours")?;
        if !(1..=2).contains(&count) {
            return Err(Error::ContourCount {
                line,
                role: Role::Subject,
                count,
            });
        }

        let subject = Polygon::read(Role::Subject.orientation(), &mut lines)?;
        let hole = (count == 2)
            .then(|| Polygon::read(Role::Hole.orientation(), &mut lines))
            .transpose()?;

        let (line, [count]) = lines.integers::<1>("amount of clip contours")?;
        if count != 1 {
            return Err(Error::ContourCount {
                line,
                role: Role::Clip,
                count,
            });
        }

        let clip = Polygon::read(Role::Clip.orientation(), &mut lines)?;
        lines.finish()?;

        debug!(width, height, hole = hole.is_some(), "scene parsed");
        Ok(Self {
            width,
            height,
            subject,
            hole,
            clip,
            styles: Styles::default(),
        })
    }
}

impl<T> fmt::Display for Scene<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{CRLF}", self.width, self.height)?;

        match &self.hole {
            Some(hole) => write!(f, "2{CRLF}{}{hole}", self.subject)?,
            None => write!(f, "1{CRLF}{}", self.subject)?,
        }

        write!(f, "1{CRLF}{}", self.clip)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error, MAX_THICKNESS, Orientation, Polygon, Rgb, Style, Styles,
        scene::{Role, Scene},
    };

    const SCENE: &str = "\
        640 480\r\n\
        2\r\n\
        4\r\n\
        0 0\r\n\
        100 0\r\n\
        100 100\r\n\
        0 100\r\n\
        4\r\n\
        20 20\r\n\
        20 80\r\n\
        80 80\r\n\
        80 20\r\n\
        1\r\n\
        3\r\n\
        50 50\r\n\
        150 50\r\n\
        50 150\r\n";

    fn polygon(role: Role, points: &[[f64; 2]]) -> Polygon<f64> {
        let mut polygon = Polygon::new(role.orientation());
        points.iter().for_each(|&point| polygon.add_point(point));
        polygon
    }

    fn scene() -> Scene<f64> {
        Scene {
            width: 640,
            height: 480,
            subject: polygon(
                Role::Subject,
                &[[0., 0.], [100., 0.], [100., 100.], [0., 100.]],
            ),
            hole: Some(polygon(
                Role::Hole,
                &[[20., 20.], [20., 80.], [80., 80.], [80., 20.]],
            )),
            clip: polygon(Role::Clip, &[[50., 50.], [150., 50.], [50., 150.]]),
            styles: Styles::default(),
        }
    }

    #[test]
    fn scene_to_string() {
        assert_eq!(scene().to_string(), SCENE);

        let mut without_hole = scene();
        without_hole.hole = None;
        assert_eq!(
            without_hole.to_string(),
            "640 480\r\n1\r\n4\r\n0 0\r\n100 0\r\n100 100\r\n0 100\r\n1\r\n3\r\n50 50\r\n150 50\r\n50 150\r\n"
        );
    }

    #[test]
    fn parse_scene() {
        struct Test {
            name: &'static str,
            text: &'static str,
            want: Result<Scene<f64>, Error>,
        }

        vec![
            Test {
                name: "subject with hole",
                text: SCENE,
                want: Ok(scene()),
            },
            Test {
                name: "commented and loosely spaced",
                text: "// canvas\n640   480\n\n1 // no hole\n3\n0 0\n10 0\n0 10\n1\n3\n1 1\n  2 1\n1 2\n",
                want: Ok(Scene {
                    width: 640,
                    height: 480,
                    subject: polygon(Role::Subject, &[[0., 0.], [10., 0.], [0., 10.]]),
                    hole: None,
                    clip: polygon(Role::Clip, &[[1., 1.], [2., 1.], [1., 2.]]),
                    styles: Styles::default(),
                }),
            },
            Test {
                name: "negative width",
                text: "-640 480\n1\n0\n1\n0\n",
                want: Err(Error::NegativeDimension {
                    width: -640,
                    height: 480,
                }),
            },
            Test {
                name: "three subject contours",
                text: "640 480\n3\n",
                want: Err(Error::ContourCount {
                    line: 2,
                    role: Role::Subject,
                    count: 3,
                }),
            },
            Test {
                name: "no clip contours",
                text: "640 480\n1\n0\n0\n",
                want: Err(Error::ContourCount {
                    line: 4,
                    role: Role::Clip,
                    count: 0,
                }),
            },
            Test {
                name: "missing clip",
                text: "640 480\n1\n0\n",
                want: Err(Error::UnexpectedEnd {
                    line: 4,
                    expected: "amount of clip contours",
                }),
            },
            Test {
                name: "fewer points than announced",
                text: "640 480\n1\n2\n0 0\n1\n0\n",
                want: Err(Error::Malformed {
                    line: 5,
                    expected: "point coordinates",
                    found: "1".to_string(),
                }),
            },
            Test {
                name: "missing height",
                text: "640\n",
                want: Err(Error::Malformed {
                    line: 1,
                    expected: "canvas width and height",
                    found: "640".to_string(),
                }),
            },
            Test {
                name: "trailing content",
                text: "640 480\n1\n0\n1\n0\n0\n",
                want: Err(Error::TrailingContent {
                    line: 6,
                    found: "0".to_string(),
                }),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.text.parse::<Scene<f64>>();
            assert_eq!(got, test.want, "{}", test.name);
        });
    }

    #[test]
    fn validate_scene() {
        struct Test {
            name: &'static str,
            scene: Scene<f64>,
            want: Result<(), Error>,
        }

        let bow_tie = &[[0., 0.], [10., 0.], [0., 10.], [10., 10.]];

        vec![
            Test {
                name: "valid scene",
                scene: scene(),
                want: Ok(()),
            },
            Test {
                name: "empty subject",
                scene: Scene::new(640, 480),
                want: Err(Error::TooFewPoints {
                    role: Role::Subject,
                    count: 0,
                }),
            },
            Test {
                name: "self-crossing clip",
                scene: Scene {
                    clip: polygon(Role::Clip, bow_tie),
                    ..scene()
                },
                want: Err(Error::NotSimple(Role::Clip)),
            },
            Test {
                name: "hole with two points",
                scene: Scene {
                    hole: Some(polygon(Role::Hole, &[[20., 20.], [20., 80.]])),
                    ..scene()
                },
                want: Err(Error::TooFewPoints {
                    role: Role::Hole,
                    count: 2,
                }),
            },
            Test {
                name: "subject through a repeated vertex",
                scene: Scene {
                    subject: polygon(
                        Role::Subject,
                        &[
                            [0., 0.],
                            [100., 0.],
                            [100., 100.],
                            [50., 120.],
                            [0., 100.],
                            [100., 100.],
                        ],
                    ),
                    hole: None,
                    ..scene()
                },
                want: Err(Error::NotSimple(Role::Subject)),
            },
            Test {
                name: "hole leaving the subject",
                scene: Scene {
                    hole: Some(polygon(
                        Role::Hole,
                        &[[20., 20.], [20., 80.], [180., 80.], [180., 20.]],
                    )),
                    ..scene()
                },
                want: Err(Error::HoleNotNested),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.scene.validate();
            assert_eq!(got, test.want, "{}", test.name);
        });
    }

    #[test]
    fn role_defaults() {
        assert_eq!(Role::Subject.orientation(), Orientation::CounterClockwise);
        assert_eq!(Role::Hole.orientation(), Orientation::Clockwise);
        assert_eq!(Role::Clip.orientation(), Orientation::CounterClockwise);
        assert_eq!(Role::Hole.default_style(), Style::SUBJECT);
        assert_eq!(Role::Clip.default_style(), Style::CLIP);
        assert_eq!(Role::Hole.to_string(), "hole");
    }

    #[test]
    fn contours_of_scene() {
        let roles: Vec<_> = scene().contours().map(|(role, _)| role).collect();
        assert_eq!(roles, vec![Role::Subject, Role::Hole, Role::Clip]);

        let roles: Vec<_> = Scene::<f64>::new(1, 1)
            .contours()
            .map(|(role, _)| role)
            .collect();
        assert_eq!(roles, vec![Role::Subject, Role::Clip]);
    }

    #[test]
    fn scene_styles() {
        let mut scene = Scene::<f64>::new(640, 480);
        assert_eq!(scene.styles, Styles::default());
        assert_eq!(scene.styles.of(Role::Subject), Style::SUBJECT);
        assert_eq!(scene.styles.of(Role::Clip), Style::CLIP);
        assert_eq!(scene.styles.intersection, Style::INTERSECTION);

        scene.styles.intersection = scene
            .styles
            .intersection
            .with_color(Rgb::BLACK)
            .with_thickness(MAX_THICKNESS)
            .expect("maximum thickness should be accepted");
        assert_eq!(scene.styles.intersection.color(), Rgb::BLACK);
        assert_eq!(scene.styles.intersection.thickness(), MAX_THICKNESS);

        assert_eq!(
            scene.styles.of(Role::Clip).with_thickness(0),
            Err(Error::Thickness {
                thickness: 0,
                max: MAX_THICKNESS,
            })
        );
        assert_eq!(scene.styles.clip, Style::CLIP);

        // Styles are not written, so a reloaded scene gets the default ones.
        let reloaded: Scene = self::scene()
            .to_string()
            .parse()
            .expect("scene should be readable");
        assert_eq!(reloaded.styles, Styles::default());
    }
}
