//! Ordered catalog of problem instances.

use std::collections::HashSet;
use nlbench_core::system::NonlinearSystem;
use crate::problem::*;

/// Problem instance owned by a [`Registry`].
pub type BoxedProblem = Box<dyn NonlinearSystem<f64> + Send + Sync>;

/// Registry errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError
{
    /// An ordinal is outside of `1..=count`.
    IndexOutOfRange {
        /// Given 1-based ordinal.
        index: usize,
        /// Number of registered problems.
        count: usize,
    },
    /// No problem has exactly the given title.
    NotFound(String),
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            RegistryError::IndexOutOfRange {index, count} => write!(f, "IndexOutOfRange: {} is out of 1..={}", index, count),
            RegistryError::NotFound(title) => write!(f, "NotFound: no problem titled \"{}\"", title),
        }
    }
}

impl std::error::Error for RegistryError {}

//

/// Problem registry
///
/// Owns one instance of every problem in a fixed order.
/// Problems are referred to by 1-based ordinal or by exact title,
/// including the `" neq = n"` suffix.
///
/// The order follows the classic registration list of the collection,
/// except that the Box and Betts exponential quadratic sum is left out for lack of a definition.
/// Every ordinal from 20 on is therefore one less than in that list;
/// ordinal 20 is the Box problem.
pub struct Registry
{
    problems: Vec<BoxedProblem>,
}

impl Registry
{
    /// Creates an instance with the whole catalog.
    ///
    /// Returns [`Registry`] instance whose order is the same on every call.
    pub fn new() -> Self
    {
        Self::from_problems(catalog())
    }

    /// Creates an instance from given problems, keeping their order.
    ///
    /// A problem whose title is already taken is dropped with a warning log.
    pub fn from_problems<I>(problems: I) -> Self
    where I: IntoIterator<Item=BoxedProblem>
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for p in problems {
            if seen.insert(p.title().to_string()) {
                kept.push(p);
            }
            else {
                log::warn!("duplicated title \"{}\" is skipped", p.title());
            }
        }

        log::debug!("registered {} problems", kept.len());

        Registry {
            problems: kept,
        }
    }

    /// Number of registered problems.
    pub fn count(&self) -> usize
    {
        self.problems.len()
    }

    /// Looks up by ordinal.
    ///
    /// Returns `Ok` with the problem at 1-based `index`, or `Err` with [`RegistryError::IndexOutOfRange`].
    pub fn by_index(&self, index: usize) -> Result<&(dyn NonlinearSystem<f64> + Send + Sync), RegistryError>
    {
        if index == 0 || index > self.count() {
            log::error!("index {} is out of 1..={}", index, self.count());
            return Err(RegistryError::IndexOutOfRange {
                index, count: self.count()
            });
        }

        Ok(self.problems[index - 1].as_ref())
    }

    /// Looks up by title.
    ///
    /// Returns `Ok` with the problem whose title equals `title`, or `Err` with [`RegistryError::NotFound`].
    /// Matching is exact and case-sensitive.
    pub fn by_name(&self, title: &str) -> Result<&(dyn NonlinearSystem<f64> + Send + Sync), RegistryError>
    {
        self.problems.iter()
            .find(|p| p.title() == title)
            .map(|p| p.as_ref())
            .ok_or_else(|| {
                log::error!("no problem titled \"{}\"", title);
                RegistryError::NotFound(title.to_string())
            })
    }

    /// Ordinal of a title.
    ///
    /// Returns the 1-based ordinal of the problem titled `title`, if any.
    pub fn position(&self, title: &str) -> Option<usize>
    {
        self.problems.iter().position(|p| p.title() == title).map(|i| i + 1)
    }

    /// Titles in registration order.
    pub fn titles(&self) -> impl Iterator<Item=&str>
    {
        self.problems.iter().map(|p| p.title())
    }

    /// Iterates problems in registration order.
    pub fn iter(&self) -> impl Iterator<Item=&(dyn NonlinearSystem<f64> + Send + Sync)>
    {
        self.problems.iter().map(|p| p.as_ref())
    }
}

impl Default for Registry
{
    fn default() -> Self
    {
        Self::new()
    }
}

//

/// Every problem instance in catalog order.
fn catalog() -> Vec<BoxedProblem>
{
    vec![
        Box::new(ArtificialTestOfNowakAndWeimann::new()),
        Box::new(BadlyScaledAugmentedPowellFunction::new(3)),
        Box::new(BadlyScaledAugmentedPowellFunction::new(30)),
        Box::new(BadlyScaledAugmentedPowellFunction::new(300)),
        Box::new(BadlyScaledAugmentedPowellFunction::new(3000)),
        Box::new(Beale::new()),
        Box::new(BertolazziRootPlusSquare::new()),
        Box::new(BertolazziAtanPlusQuadratic::new()),
        Box::new(BertolazziHard::new()),
        Box::new(BertolazziSingleEQ::new()),
        Box::new(BiggsExp::new(2)),
        Box::new(BiggsExp::new(3)),
        Box::new(BiggsExp::new(4)),
        Box::new(BiggsExp::new(5)),
        Box::new(BiggsExp6::new()),
        Box::new(BoggsFunction::new()),
        Box::new(Bohachevsky::new(1)),
        Box::new(Bohachevsky::new(2)),
        Box::new(Bohachevsky::new(3)),
        Box::new(BoxProblem::new()),
        Box::new(Box3::new()),
        Box::new(BraninRCOS::new()),
        Box::new(BrownAlmostLinearFunction::new(5)),
        Box::new(BrownAlmostLinearFunction::new(15)),
        Box::new(BrownAlmostLinearFunction::new(25)),
        Box::new(BrownAndConteFunction::new()),
        Box::new(BrownAndDennis::new()),
        Box::new(BrownAndGearhartFunction::new()),
        Box::new(BrownBadlyScaled::new()),
        Box::new(BrownFunction::new()),
        Box::new(BroydenBandedFunction::new()),
        Box::new(BroydenTridiagonalFunction::new(0.1, 1., 5)),
        Box::new(BroydenTridiagonalFunction::new(0.1, 1., 10)),
        Box::new(BroydenTridiagonalFunction::new(0.1, 1., 500)),
        Box::new(BroydenTridiagonalFunction::new(0.5, 1., 5)),
        Box::new(BroydenTridiagonalFunction::new(0.5, 1., 10)),
        Box::new(BroydenTridiagonalFunction::new(0.5, 1., 500)),
        Box::new(BUNLSI5::new()),
        Box::new(BUNLSI6::new()),
        Box::new(BurdenAndFaires::new()),
        Box::new(Chandrasekhar::new(0.9999, 10)),
        Box::new(Chandrasekhar::new(0.9999, 50)),
        Box::new(Chandrasekhar::new(0.9, 10)),
        Box::new(Chandrasekhar::new(0.9, 50)),
        Box::new(ChebyquadFunction::new(1)),
        Box::new(ChebyquadFunction::new(2)),
        Box::new(ChebyquadFunction::new(3)),
        Box::new(ChebyquadFunction::new(4)),
        Box::new(ChebyquadFunction::new(5)),
        Box::new(ChebyquadFunction::new(6)),
        Box::new(ChebyquadFunction::new(7)),
        Box::new(ChebyquadFunction::new(8)),
        Box::new(ChebyquadFunction::new(9)),
        Box::new(ChemicalEquilibriumApplication::new()),
        Box::new(ChemicalEquilibriumPartialMethaneOxidation::new()),
        Box::new(ChemicalReactorEquilibriumConversion::new()),
        Box::new(ChemicalReactorSteadyState::new()),
        Box::new(CliffFunction::new()),
        Box::new(Colville::new()),
        Box::new(CombustionApplication::new()),
        Box::new(ComplementaryFunction::new(2)),
        Box::new(ComplementaryFunction::new(16)),
        Box::new(ComplementaryFunction::new(128)),
        Box::new(CompressibilityFactorFromTheRKequation::new()),
        Box::new(CountercurrentReactorsProblem1::new(6)),
        Box::new(CountercurrentReactorsProblem1::new(12)),
        Box::new(CountercurrentReactorsProblem1::new(50)),
        Box::new(CountercurrentReactorsProblem2::new(6)),
        Box::new(CountercurrentReactorsProblem2::new(12)),
        Box::new(CountercurrentReactorsProblem2::new(50)),
        Box::new(CraggAndLevyProblem::new()),
        Box::new(CubeFunction::new()),
        Box::new(CutlipsSteadyStateForReactionRateEquations::new(0)),
        Box::new(CutlipsSteadyStateForReactionRateEquations::new(1)),
        Box::new(CutlipsSteadyStateForReactionRateEquations::new(2)),
        Box::new(DarvishiBarati::new()),
        Box::new(DennisAndGay6eq::new(1)),
        Box::new(DennisAndGay6eq::new(2)),
        Box::new(DennisAndGay6eq::new(3)),
        Box::new(DennisAndGay6eq::new(4)),
        Box::new(DennisAndGay6eq::new(5)),
        Box::new(DennisAndGay8eq::new(1)),
        Box::new(DennisAndGay8eq::new(2)),
        Box::new(DennisAndGay8eq::new(3)),
        Box::new(DennisAndGay8eq::new(4)),
        Box::new(DennisAndGay8eq::new(5)),
        Box::new(DennisAndSchnabel2x2example::new()),
        Box::new(DeVilliersGlasser01::new()),
        Box::new(DeVilliersGlasser02::new()),
        Box::new(DiagonalFunctionMulQO::new(9)),
        Box::new(DiagonalFunctionMulQO::new(27)),
        Box::new(DiscreteBoundaryValueFunction::new(10)),
        Box::new(DiscreteBoundaryValueFunction::new(50)),
        Box::new(DiscreteBoundaryValueFunction::new(100)),
        Box::new(DiscreteBoundaryValueFunction::new(500)),
        Box::new(DiscreteBoundaryValueFunction::new(5000)),
        Box::new(DiscreteIntegralEquationFunction::new(2)),
        Box::new(DiscreteIntegralEquationFunction::new(5)),
        Box::new(DiscreteIntegralEquationFunction::new(10)),
        Box::new(DiscreteIntegralEquationFunction::new(100)),
        Box::new(DixonFunction::new(80)),
        Box::new(DixonFunction::new(2000)),
        Box::new(DixonFunction::new(5000)),
        Box::new(Easom::new()),
        Box::new(EsterificReaction::new()),
        Box::new(ExponentialFunction1::new(2)),
        Box::new(ExponentialFunction1::new(10)),
        Box::new(ExponentialFunction1::new(50)),
        Box::new(ExponentialFunction1::new(500)),
        Box::new(ExponentialFunction1::new(5000)),
        Box::new(ExponentialFunction2::new(2)),
        Box::new(ExponentialFunction2::new(10)),
        Box::new(ExponentialFunction2::new(50)),
        Box::new(ExponentialFunction2::new(500)),
        Box::new(ExponentialFunction2::new(5000)),
        Box::new(ExponentialFunction3::new(2)),
        Box::new(ExponentialFunction3::new(10)),
        Box::new(ExponentialFunction3::new(50)),
        Box::new(ExponentialFunction3::new(500)),
        Box::new(ExponentialFunction3::new(5000)),
        Box::new(ExponentialSine::new()),
        Box::new(ExtendedEigerSikorskiStenger::new()),
        Box::new(ExtendedKearfottFunction::new()),
        Box::new(ExtendedPowellSingularFunction::new()),
        Box::new(FractionalConversionInAchemicalReactor::new()),
        Box::new(FractionalConversionInAchemicalReactor2::new()),
        Box::new(FreudensteinRothFunction::new()),
        Box::new(Function15::new(10)),
        Box::new(Function15::new(50)),
        Box::new(Function15::new(100)),
        Box::new(Function18::new(3)),
        Box::new(Function18::new(9)),
        Box::new(Function18::new(27)),
        Box::new(Function21::new(3)),
        Box::new(Function21::new(6)),
        Box::new(Function21::new(36)),
        Box::new(Function27::new(2)),
        Box::new(Function27::new(10)),
        Box::new(Function27::new(100)),
        Box::new(Gauss::new()),
        Box::new(GeneralizedRosenbrock::new(2)),
        Box::new(GeneralizedRosenbrock::new(10)),
        Box::new(GeneralizedRosenbrock::new(50)),
        Box::new(GeneralizedRosenbrock::new(500)),
        Box::new(GeometricProgrammingFunction::new(5)),
        Box::new(GeometricProgrammingFunction::new(10)),
        Box::new(GeometricProgrammingFunction::new(50)),
        Box::new(GeometricProgrammingFunction::new(100)),
        Box::new(GheriMancino::new(10)),
        Box::new(GheriMancino::new(30)),
        Box::new(GheriMancino::new(100)),
        Box::new(GoldsteinPrice::new()),
        Box::new(GregoryAndKarney::new(10)),
        Box::new(GregoryAndKarney::new(20)),
        Box::new(GregoryAndKarney::new(100)),
        Box::new(GriewankFunction::new(2)),
        Box::new(GriewankFunction::new(5)),
        Box::new(GriewankFunction::new(10)),
        Box::new(Gulf::new()),
        Box::new(HammarlingMatrixSquareRoot::two_by_two()),
        Box::new(HammarlingMatrixSquareRoot::three_by_three(1)),
        Box::new(HammarlingMatrixSquareRoot::three_by_three(2)),
        Box::new(HammarlingMatrixSquareRoot::three_by_three(3)),
        Box::new(HanbookFunction::new(2)),
        Box::new(HanbookFunction::new(10)),
        Box::new(HanbookFunction::new(50)),
        Box::new(HanSunHan::new()),
        Box::new(HAS64::new(1e2)),
        Box::new(HAS64::new(1e4)),
        Box::new(HAS64::new(1e6)),
        Box::new(HAS64::new(1e8)),
        Box::new(HAS64::new(1e10)),
        Box::new(HAS93::new(1e2)),
        Box::new(HAS93::new(1e4)),
        Box::new(HAS93::new(1e6)),
        Box::new(HAS93::new(1e8)),
        Box::new(HAS93::new(1e10)),
        Box::new(HAS111::new()),
        Box::new(HelicalValleyFunction::new()),
        Box::new(HiebertChem10x10::new()),
        Box::new(HiebertChem2x2::new()),
        Box::new(HiebertChem6x6::new()),
        Box::new(Hiebert3ChemicalEquilibriumProblem::new(10.)),
        Box::new(Hiebert3ChemicalEquilibriumProblem::new(40.)),
        Box::new(Hilbert::new(4)),
        Box::new(Hilbert::new(8)),
        Box::new(Hilbert::new(32)),
        Box::new(Hilbert::new(64)),
        Box::new(Hilbert::new(256)),
        Box::new(Himmelblau::new()),
        Box::new(InfRefluxFunction::new()),
        Box::new(IntervalArithmeticBenchmarks::new()),
        Box::new(JennrichAndSampsonFunction::new()),
        Box::new(KelleyFunction::new()),
        Box::new(KinematicApplication::new()),
        Box::new(Leon::new()),
        Box::new(LinearFunctionFullRank::new()),
        Box::new(LinearFunctionRank1::new()),
        Box::new(LogarithmicFunction::new(2)),
        Box::new(LogarithmicFunction::new(10)),
        Box::new(LogarithmicFunction::new(50)),
        Box::new(LogarithmicFunction::new(500)),
        Box::new(LogarithmicFunction::new(5000)),
        Box::new(McCormicFunction::new()),
        Box::new(McKinnon::new()),
        Box::new(MexicanHatFunction::new(1e2)),
        Box::new(MexicanHatFunction::new(1e4)),
        Box::new(MexicanHatFunction::new(1e6)),
        Box::new(MexicanHatFunction::new(1e8)),
        Box::new(MieleAndCantrellFunction::new()),
        Box::new(ModelEquationsForTheCSTR::new()),
        Box::new(ModelEquationsForCombustionOfPropane::new(10.)),
        Box::new(ModelEquationsForCombustionOfPropane::new(5.)),
        Box::new(NonlinearIntegralEquations::new()),
        Box::new(Order10to11function::new()),
        Box::new(PavianiFunction::new()),
        Box::new(PenaltyIfunction::new(10)),
        Box::new(PenaltyIfunction::new(50)),
        Box::new(PenaltyN1::new(2)),
        Box::new(PenaltyN1::new(10)),
        Box::new(PenaltyN1::new(50)),
        Box::new(PenaltyN1::new(200)),
        Box::new(PenaltyN2::new(2)),
        Box::new(PenaltyN2::new(10)),
        Box::new(PenaltyN2::new(50)),
        Box::new(PenaltyN2::new(200)),
        Box::new(PipelineNetworkProblem::new()),
        Box::new(PipelineNetworkProblem2::new()),
        Box::new(PowellBadlyScaledFunction::new()),
        Box::new(PowellQuarticFunction::new()),
        Box::new(Powell3D::new()),
        Box::new(RooseKullaLombMeressoo129::new()),
        Box::new(RooseKullaLombMeressoo201::new(10)),
        Box::new(RooseKullaLombMeressoo201::new(100)),
        Box::new(RooseKullaLombMeressoo201::new(500)),
        Box::new(RooseKullaLombMeressoo202::new(10)),
        Box::new(RooseKullaLombMeressoo202::new(100)),
        Box::new(RooseKullaLombMeressoo203::new(2)),
        Box::new(RooseKullaLombMeressoo203::new(5)),
        Box::new(RooseKullaLombMeressoo203::new(7)),
        Box::new(RooseKullaLombMeressoo203::new(10)),
        Box::new(RooseKullaLombMeressoo203::new(15)),
        Box::new(RooseKullaLombMeressoo203::new(20)),
        Box::new(RooseKullaLombMeressoo203::new(30)),
        Box::new(RooseKullaLombMeressoo203::new(50)),
        Box::new(RooseKullaLombMeressoo204::new(10)),
        Box::new(RooseKullaLombMeressoo204::new(100)),
        Box::new(RooseKullaLombMeressoo204::new(500)),
        Box::new(RooseKullaLombMeressoo205::new(2)),
        Box::new(RooseKullaLombMeressoo205::new(5)),
        Box::new(RooseKullaLombMeressoo205::new(10)),
        Box::new(RooseKullaLombMeressoo205::new(20)),
        Box::new(RooseKullaLombMeressoo205::new(30)),
        Box::new(RooseKullaLombMeressoo206::new(2)),
        Box::new(RooseKullaLombMeressoo206::new(5)),
        Box::new(RooseKullaLombMeressoo206::new(10)),
        Box::new(RooseKullaLombMeressoo206::new(20)),
        Box::new(RooseKullaLombMeressoo206::new(30)),
        Box::new(RooseKullaLombMeressoo207::new(2)),
        Box::new(RooseKullaLombMeressoo207::new(5)),
        Box::new(RooseKullaLombMeressoo207::new(10)),
        Box::new(RooseKullaLombMeressoo207::new(20)),
        Box::new(RooseKullaLombMeressoo207::new(30)),
        Box::new(RooseKullaLombMeressoo208::new(2)),
        Box::new(RooseKullaLombMeressoo208::new(5)),
        Box::new(RooseKullaLombMeressoo208::new(10)),
        Box::new(RooseKullaLombMeressoo208::new(20)),
        Box::new(RooseKullaLombMeressoo208::new(30)),
        Box::new(RooseKullaLombMeressoo209::new(10)),
        Box::new(RooseKullaLombMeressoo209::new(100)),
        Box::new(RooseKullaLombMeressoo209::new(500)),
        Box::new(RooseKullaLombMeressoo210::new(10)),
        Box::new(RooseKullaLombMeressoo211::new(10)),
        Box::new(RooseKullaLombMeressoo212::new(10)),
        Box::new(RooseKullaLombMeressoo212::new(100)),
        Box::new(RooseKullaLombMeressoo212::new(500)),
        Box::new(RooseKullaLombMeressoo213::new(2)),
        Box::new(RooseKullaLombMeressoo213::new(5)),
        Box::new(RooseKullaLombMeressoo213::new(10)),
        Box::new(RooseKullaLombMeressoo213::new(20)),
        Box::new(RooseKullaLombMeressoo213::new(30)),
        Box::new(RooseKullaLombMeressoo214::new(2)),
        Box::new(RooseKullaLombMeressoo214::new(5)),
        Box::new(RooseKullaLombMeressoo214::new(10)),
        Box::new(RooseKullaLombMeressoo214::new(20)),
        Box::new(RooseKullaLombMeressoo214::new(30)),
        Box::new(RooseKullaLombMeressoo215::new(2)),
        Box::new(RooseKullaLombMeressoo215::new(5)),
        Box::new(RooseKullaLombMeressoo215::new(6)),
        Box::new(RooseKullaLombMeressoo215::new(10)),
        Box::new(RooseKullaLombMeressoo215::new(20)),
        Box::new(RooseKullaLombMeressoo215::new(30)),
        Box::new(RooseKullaLombMeressoo216::new(2)),
        Box::new(RooseKullaLombMeressoo216::new(5)),
        Box::new(RooseKullaLombMeressoo216::new(7)),
        Box::new(RooseKullaLombMeressoo216::new(9)),
        Box::new(RooseKullaLombMeressoo217::new(2)),
        Box::new(RooseKullaLombMeressoo217::new(5)),
        Box::new(RooseKullaLombMeressoo217::new(10)),
        Box::new(RooseKullaLombMeressoo217::new(20)),
        Box::new(RooseKullaLombMeressoo217::new(30)),
        Box::new(RooseKullaLombMeressoo218::new(2)),
        Box::new(RooseKullaLombMeressoo218::new(5)),
        Box::new(RooseKullaLombMeressoo218::new(10)),
        Box::new(RooseKullaLombMeressoo218::new(20)),
        Box::new(RooseKullaLombMeressoo218::new(30)),
        Box::new(RooseKullaLombMeressoo219::new(2)),
        Box::new(RooseKullaLombMeressoo219::new(5)),
        Box::new(RooseKullaLombMeressoo219::new(10)),
        Box::new(RooseKullaLombMeressoo219::new(20)),
        Box::new(RooseKullaLombMeressoo219::new(30)),
        Box::new(SampleProblem18::new()),
        Box::new(SampleProblem19::new()),
        Box::new(ScalarProblem::new()),
        Box::new(SchafferF6::new()),
        Box::new(SchafferF7::new()),
        Box::new(SchubertBroydenFunction::new(10)),
        Box::new(SchubertBroydenFunction::new(100)),
        Box::new(SchubertBroydenFunction::new(1000)),
        Box::new(SchubertBroydenFunction::new(5000)),
        Box::new(Semiconductor2D::new()),
        Box::new(ShekelSQR::new(5)),
        Box::new(ShekelSQR::new(7)),
        Box::new(ShekelSQR::new(10)),
        Box::new(ShenYpma5::new()),
        Box::new(ShenYpma7::new()),
        Box::new(ShenYpma8::new()),
        Box::new(Shubert::new()),
        Box::new(SingularFunction::new(2)),
        Box::new(SingularFunction::new(10)),
        Box::new(SingularFunction::new(50)),
        Box::new(SingularFunction::new(500)),
        Box::new(SingularFunction::new(5000)),
        Box::new(SingularSystem::new(SingularCase::A)),
        Box::new(SingularSystem::new(SingularCase::B)),
        Box::new(SingularSystem::new(SingularCase::C)),
        Box::new(SingularSystem::new(SingularCase::D)),
        Box::new(SingularSystem::new(SingularCase::E)),
        Box::new(SingularSystem::new(SingularCase::F)),
        Box::new(SingularSystem::new(SingularCase::P2)),
        Box::new(SingularSystem::new(SingularCase::P3)),
        Box::new(SingularSystem::new(SingularCase::P4)),
        Box::new(SingularSystem::new(SingularCase::P5)),
        Box::new(SingularSystem::new(SingularCase::P6)),
        Box::new(SingularSystem::new(SingularCase::P7)),
        Box::new(SingularSystem::new(SingularCase::P8)),
        Box::new(SingularSystem::new(SingularCase::P9)),
        Box::new(SIRtest::new(2)),
        Box::new(SIRtest::new(20)),
        Box::new(SIRtest::new(100)),
        Box::new(SixHumpCamelBackFunction::new()),
        Box::new(SoniaKrzyworzcka1::new()),
        Box::new(SoniaKrzyworzcka2::new()),
        Box::new(SpedicatoFunction17::new(10)),
        Box::new(SpedicatoFunction17::new(50)),
        Box::new(SpedicatoFunction17::new(100)),
        Box::new(SpedicatoFunction17::new(500)),
        Box::new(SSTnonlinearityTerm::new(0)),
        Box::new(SSTnonlinearityTerm::new(1)),
        Box::new(StrictlyConvexFunction1::new(2)),
        Box::new(StrictlyConvexFunction1::new(10)),
        Box::new(StrictlyConvexFunction1::new(50)),
        Box::new(StrictlyConvexFunction1::new(500)),
        Box::new(StrictlyConvexFunction1::new(5000)),
        Box::new(StrictlyConvexFunction2::new(2)),
        Box::new(StrictlyConvexFunction2::new(10)),
        Box::new(StrictlyConvexFunction2::new(50)),
        Box::new(StrictlyConvexFunction2::new(500)),
        Box::new(StrictlyConvexFunction2::new(5000)),
        Box::new(Toint225::new(10)),
        Box::new(Toint225::new(100)),
        Box::new(Toint225::new(500)),
        Box::new(TridimensionalValley::new()),
        Box::new(TrigonometricExponentialSystem1::new(10)),
        Box::new(TrigonometricExponentialSystem1::new(50)),
        Box::new(TrigonometricExponentialSystem1::new(500)),
        Box::new(TrigonometricExponentialSystem2::new(9)),
        Box::new(TrigonometricExponentialSystem2::new(27)),
        Box::new(TrigonometricExponentialSystem2::new(81)),
        Box::new(TrigExp::new(10)),
        Box::new(TrigExp::new(100)),
        Box::new(TrigonometricFunction::new(2)),
        Box::new(TrigonometricFunction::new(10)),
        Box::new(TrigonometricFunction::new(50)),
        Box::new(TroeschFunction::new(2)),
        Box::new(TroeschFunction::new(10)),
        Box::new(TroeschFunction::new(50)),
        Box::new(TroeschFunction::new(500)),
        Box::new(TroeschFunction::new(5000)),
        Box::new(TwoPointBoundaryValueProblem::new(10)),
        Box::new(TwoPointBoundaryValueProblem::new(100)),
        Box::new(TwoPointBoundaryValueProblem::new(1000)),
        Box::new(TwoPointBoundaryValueProblem::new(5000)),
        Box::new(VariablyDimensionedFunction::new(5)),
        Box::new(VariablyDimensionedFunction::new(10)),
        Box::new(VariablyDimensionedFunction::new(50)),
        Box::new(WatsonFunction::new()),
        Box::new(Weibull::new()),
        Box::new(WoodFunction::new()),
        Box::new(XiaoYin1::new()),
        Box::new(XiaoYin2::new()),
        Box::new(XiaoYin3::new()),
        Box::new(YixunShi1::new()),
        Box::new(YixunShi2::new()),
        Box::new(YixunShi3::new()),
        Box::new(YixunShi4::new()),
        Box::new(ZeroJacobianFunction::new(10)),
        Box::new(ZeroJacobianFunction::new(50)),
        Box::new(ZeroJacobianFunction::new(101)),
    ]
}

//

#[test]
fn test_registry1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let reg = Registry::new();
    assert!(reg.count() > 400);

    let first = reg.by_index(1).unwrap();
    assert_eq!(first.title(), "Artificial Test of Nowak and Weimann neq = 2");

    let last = reg.by_index(reg.count()).unwrap();
    assert_eq!(last.title(), "Zero Jacobian Function (same as function 27) neq = 101");

    assert_eq!(reg.by_index(0).err(), Some(RegistryError::IndexOutOfRange {index: 0, count: reg.count()}));
    assert!(reg.by_index(reg.count() + 1).is_err());

    // one entry of the classic list is missing before this one
    assert_eq!(reg.by_index(19).unwrap().title(), "BohachevskyN3 neq = 2");
    assert_eq!(reg.by_index(20).unwrap().title(), "Box Problem neq = 3");
}

#[test]
fn test_registry2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let reg = Registry::new();

    let p = reg.by_name("Scalar problem f(x) = x * ( x - 5 )**2 neq = 1").unwrap();
    assert_eq!(p.num_equations(), 1);

    // suffix is part of the title
    assert_eq!(
        reg.by_name("Scalar problem f(x) = x * ( x - 5 )**2").err(),
        Some(RegistryError::NotFound("Scalar problem f(x) = x * ( x - 5 )**2".to_string()))
    );
    assert!(reg.by_name("scalar problem f(x) = x * ( x - 5 )**2 neq = 1").is_err());

    for (k, t) in reg.titles().enumerate() {
        assert_eq!(reg.position(t), Some(k + 1));
    }
}

#[test]
fn test_registry3()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let reg = Registry::from_problems([
        Box::new(ScalarProblem::new()) as BoxedProblem,
        Box::new(Beale::new()),
        Box::new(ScalarProblem::new()),
    ]);
    assert_eq!(reg.count(), 2);
    assert_eq!(reg.by_index(2).unwrap().title(), Beale::new().title());

    let a: Vec<String> = Registry::new().titles().map(String::from).collect();
    let b: Vec<String> = Registry::new().titles().map(String::from).collect();
    assert_eq!(a, b);
}
