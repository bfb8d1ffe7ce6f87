// ============================================================================
// Constants
// Precomputed irrational values as 500-digit fractions
// ============================================================================

use crate::numeric::Fraction;
use std::fmt;
use std::sync::OnceLock;

/// Named constants with 500 truncated decimal places.
///
/// Passing one of these (rather than its value) to `sin`, `cos`, `tan` or
/// `ln` lets those functions return exact answers: `cos(Pi)` is `-1`,
/// `ln(E)` is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constant {
    Pi,
    E,
    Sqrt2,
    Sqrt1_2,
    Phi,
    Ln10,
    Log10E,
    Log2E,
    Ln2,
}

/// Decimal places stored for every constant
pub const CONSTANT_DIGITS: usize = 500;

static CACHE: [OnceLock<Fraction>; 9] = [const { OnceLock::new() }; 9];

impl Constant {
    pub const ALL: [Constant; 9] = [
        Constant::Pi,
        Constant::E,
        Constant::Sqrt2,
        Constant::Sqrt1_2,
        Constant::Phi,
        Constant::Ln10,
        Constant::Log10E,
        Constant::Log2E,
        Constant::Ln2,
    ];

    /// Conventional upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "PI",
            Constant::E => "E",
            Constant::Sqrt2 => "SQRT2",
            Constant::Sqrt1_2 => "SQRT1_2",
            Constant::Phi => "PHI",
            Constant::Ln10 => "LN10",
            Constant::Log10E => "LOG10_E",
            Constant::Log2E => "LOG2_E",
            Constant::Ln2 => "LN2",
        }
    }

    /// Decimal literal the value is built from
    pub fn literal(self) -> &'static str {
        match self {
            Constant::Pi => PI,
            Constant::E => E,
            Constant::Sqrt2 => SQRT2,
            Constant::Sqrt1_2 => SQRT1_2,
            Constant::Phi => PHI,
            Constant::Ln10 => LN10,
            Constant::Log10E => LOG10_E,
            Constant::Log2E => LOG2_E,
            Constant::Ln2 => LN2,
        }
    }

    /// The constant as a fraction over 10^500.
    ///
    /// Parsed once per process and cloned afterwards.
    pub fn value(self) -> Fraction {
        CACHE[self as usize]
            .get_or_init(|| {
                tracing::trace!(constant = self.name(), "parsing constant literal");
                // The literals are fixed decimal text; parsing cannot fail.
                self.literal()
                    .parse()
                    .expect("constant literal is a valid decimal")
            })
            .clone()
    }

    /// Value for a computation carrying `digits` working digits; warns when the
    /// stored precision is the limiting factor.
    pub(crate) fn value_for(self, digits: usize) -> Fraction {
        if digits > CONSTANT_DIGITS {
            tracing::warn!(
                constant = self.name(),
                requested = digits,
                available = CONSTANT_DIGITS,
                "requested accuracy exceeds stored constant precision"
            );
        }
        self.value()
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Literals (truncated, not rounded)
// ============================================================================

const PI: &str = concat!(
    "3.",
    "1415926535897932384626433832795028841971693993751058209749445923078164",
    "0628620899862803482534211706798214808651328230664709384460955058223172",
    "5359408128481117450284102701938521105559644622948954930381964428810975",
    "6659334461284756482337867831652712019091456485669234603486104543266482",
    "1339360726024914127372458700660631558817488152092096282925409171536436",
    "7892590360011330530548820466521384146951941511609433057270365759591953",
    "0921861173819326117931051185480744623799627495673518857527248912279381",
    "8301194912",
);

const E: &str = concat!(
    "2.",
    "7182818284590452353602874713526624977572470936999595749669676277240766",
    "3035354759457138217852516642742746639193200305992181741359662904357290",
    "0334295260595630738132328627943490763233829880753195251019011573834187",
    "9307021540891499348841675092447614606680822648001684774118537423454424",
    "3710753907774499206955170276183860626133138458300075204493382656029760",
    "6737113200709328709127443747047230696977209310141692836819025515108657",
    "4637721112523897844250569536967707854499699679468644549059879316368892",
    "3009879312",
);

const SQRT2: &str = concat!(
    "1.",
    "4142135623730950488016887242096980785696718753769480731766797379907324",
    "7846210703885038753432764157273501384623091229702492483605585073721264",
    "4121497099935831413222665927505592755799950501152782060571470109559971",
    "6059702745345968620147285174186408891986095523292304843087143214508397",
    "6260362799525140798968725339654633180882964062061525835239505474575028",
    "7759961729835575220337531857011354374603408498847160386899970699004815",
    "0305440277903164542478230684929369186215805784631115966687130130156185",
    "6898723723",
);

const SQRT1_2: &str = concat!(
    "0.",
    "7071067811865475244008443621048490392848359376884740365883398689953662",
    "3923105351942519376716382078636750692311545614851246241802792536860632",
    "2060748549967915706611332963752796377899975250576391030285735054779985",
    "8029851372672984310073642587093204445993047761646152421543571607254198",
    "8130181399762570399484362669827316590441482031030762917619752737287514",
    "3879980864917787610168765928505677187301704249423580193449985349502407",
    "5152720138951582271239115342464684593107902892315557983343565065078092",
    "8449361861",
);

const PHI: &str = concat!(
    "1.",
    "6180339887498948482045868343656381177203091798057628621354486227052604",
    "6281890244970720720418939113748475408807538689175212663386222353693179",
    "3180060766726354433389086595939582905638322661319928290267880675208766",
    "8925017116962070322210432162695486262963136144381497587012203408058879",
    "5445474924618569536486444924104432077134494704956584678850987433944221",
    "2544877066478091588460749988712400765217057517978834166256249407589069",
    "7040002812104276217711177780531531714101170466659914669798731761356006",
    "7087480710",
);

const LN10: &str = concat!(
    "2.",
    "3025850929940456840179914546843642076011014886287729760333279009675726",
    "0967735248023599720508959829834196778404228624863340952546508280675666",
    "6287369098781689482907208325554680843799894826233198528393505308965377",
    "7326288461633662222876982198867465436674744042432743651550489343149393",
    "9147961940440022210510171417480036880840126470806855677432162283552201",
    "1480466371565912137345074785694768346361679210180644507064800027750268",
    "4916746550586856935673420670581136429224554405758925724208241314695689",
    "0167589402",
);

const LOG10_E: &str = concat!(
    "0.",
    "4342944819032518276511289189166050822943970058036665661144537831658646",
    "4920887077472922494933843174831870610674476630373364167928715896390656",
    "9221064662812265852127086568670329593370869658826688331163607738490514",
    "2844348666768646586085135561482123487653435434357317253835622281395603",
    "0486466523660955393773561763234319167109914115978949629935124579349263",
    "5765546907767108241915047991098967490010327753765357027008732855095173",
    "1440674697951899513594088040423931518868108402544654089797029863286828",
    "7626241440",
);

const LOG2_E: &str = concat!(
    "1.",
    "4426950408889634073599246810018921374266459541529859341354494069311092",
    "1918118507988552662289350634449699751830965254425559310168716835964272",
    "0662158223479336274537369884718493630701387663532015533894318916664837",
    "6431286154240474784222894979047950915303513385880549688658930969963680",
    "3611051107563084414542721582834494189193390857771579004417128024684834",
    "1374522695182369011239094034459968539906113421722886278029158010630061",
    "9767624456526059950737532406256558154759381783052397255107248130771562",
    "6754580757",
);

const LN2: &str = concat!(
    "0.",
    "6931471805599453094172321214581765680755001343602552541206800094933936",
    "2196969471560586332699641868754200148102057068573368552023575813055703",
    "2670751635075961930727570828371435190307038623891673471123350115364497",
    "9552391204751726815749320651555247341395258829504530070953263666426541",
    "0423915781495204374043038550080194417064167151864471283996817178454695",
    "7026271631064546150257207402481637773389638550695260668341137273873722",
    "9289564935470257626520988596932019650585547647033067936544325476327449",
    "5125040606",
);
