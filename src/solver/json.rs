use super::{GomorySettings, GomorySolver, Problem};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

/// Read and write a solver's problem and settings as JSON
pub trait SolverJSONReadWrite: Sized {
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    fn read_from_file(file: &mut File) -> Result<Self, io::Error>;
}

// The problem data as given by the user, plus settings

#[derive(Serialize, Deserialize)]
struct JsonProblemData {
    pub problem: Problem,
    pub settings: GomorySettings,
}

impl SolverJSONReadWrite for GomorySolver {
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json_data = JsonProblemData {
            problem: self.problem().clone(),
            settings: self.settings().clone(),
        };

        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonProblemData = serde_json::from_str(&buffer)?;

        Self::new(json_data.problem, json_data.settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[test]
fn test_json_io() {
    use super::{ConstraintType, Sense};
    use crate::algebra::Rational;
    use std::io::{Seek, SeekFrom};

    let problem = Problem::new([6, 8, 7], Sense::Maximize)
        .add_constraint([4, 6, 8], ConstraintType::LessEqual, 14)
        .add_constraint(
            ["1/2", "0", "0"].map(|s| s.parse::<Rational>().unwrap()),
            ConstraintType::GreaterEqual,
            Rational::new(-3, 4).unwrap(),
        )
        .with_integer_vars([0, 2])
        .with_var_names(["a", "b", "c"]);

    let settings = GomorySettings {
        max_cuts: 7,
        ..GomorySettings::default()
    };

    let solver = GomorySolver::new(problem.clone(), settings.clone()).unwrap();

    let mut file = tempfile::tempfile().unwrap();
    solver.write_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let solver2 = GomorySolver::read_from_file(&mut file).unwrap();

    assert_eq!(solver2.problem(), &problem);
    assert_eq!(solver2.settings(), &settings);
}
