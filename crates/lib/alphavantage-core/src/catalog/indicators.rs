use alphavantage_schema::models::{EndpointSchema, ParamSpec};
use alphavantage_schema::schema::INTERVALS_INTRADAY;

use super::params::{
    ENTITLEMENT,
    INDICATOR_INTERVAL,
    MONTH,
    SERIES_TYPE,
    SYMBOL,
    TIME_PERIOD,
    interval,
    ma_type,
    period,
    positive_float,
};

const PERIOD_AND_SERIES: &[ParamSpec] = &[
    SYMBOL,
    INDICATOR_INTERVAL,
    TIME_PERIOD,
    SERIES_TYPE,
    MONTH,
    ENTITLEMENT,
];

const PERIOD_ONLY: &[ParamSpec] = &[SYMBOL, INDICATOR_INTERVAL, TIME_PERIOD, MONTH, ENTITLEMENT];

const SERIES_ONLY: &[ParamSpec] = &[SYMBOL, INDICATOR_INTERVAL, SERIES_TYPE, MONTH, ENTITLEMENT];

const PRICE_VOLUME: &[ParamSpec] = &[SYMBOL, INDICATOR_INTERVAL, MONTH, ENTITLEMENT];

const FASTPERIOD: ParamSpec = period("fastperiod", "Period of the fast moving average.");
const SLOWPERIOD: ParamSpec = period("slowperiod", "Period of the slow moving average.");
const SIGNALPERIOD: ParamSpec = period("signalperiod", "Period of the signal line.");
const FASTKPERIOD: ParamSpec = period("fastkperiod", "Time period of the fastk moving average.");
const FASTDPERIOD: ParamSpec = period("fastdperiod", "Time period of the fastd moving average.");
const FASTDMATYPE: ParamSpec = ma_type("fastdmatype", "Moving average type of the fastd line.");
const MATYPE: ParamSpec = ma_type("matype", "Moving average type.");

macro_rules! indicator {
    ($name:literal, $function:literal, $description:literal, $($params:tt)+) => {
        endpoint! {
            name: $name,
            family: alphavantage_schema::models::Family::TechnicalIndicator,
            function: $function,
            shape: alphavantage_schema::models::ResponseShape::Series,
            description: $description,
            parameters: $($params)+,
        }
    };
}

pub static ENDPOINTS: &[EndpointSchema] = &[
    indicator!("get_sma", "SMA", "Simple moving average (SMA) values.", PERIOD_AND_SERIES),
    indicator!("get_ema", "EMA", "Exponential moving average (EMA) values.", PERIOD_AND_SERIES),
    indicator!("get_wma", "WMA", "Weighted moving average (WMA) values.", PERIOD_AND_SERIES),
    indicator!("get_dema", "DEMA", "Double exponential moving average (DEMA) values.", PERIOD_AND_SERIES),
    indicator!("get_tema", "TEMA", "Triple exponential moving average (TEMA) values.", PERIOD_AND_SERIES),
    indicator!("get_trima", "TRIMA", "Triangular moving average (TRIMA) values.", PERIOD_AND_SERIES),
    indicator!("get_kama", "KAMA", "Kaufman adaptive moving average (KAMA) values.", PERIOD_AND_SERIES),
    indicator!(
        "get_mama",
        "MAMA",
        "MESA adaptive moving average (MAMA) values.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            SERIES_TYPE,
            positive_float("fastlimit", "Fast limit of the adaptive average."),
            positive_float("slowlimit", "Slow limit of the adaptive average."),
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!(
        "get_vwap",
        "VWAP",
        "Volume weighted average price (VWAP) for intraday series.",
        [SYMBOL, interval(INTERVALS_INTRADAY, "5min"), MONTH, ENTITLEMENT]
    ),
    indicator!("get_t3", "T3", "Triple exponential moving average (T3) values.", PERIOD_AND_SERIES),
    indicator!(
        "get_macd",
        "MACD",
        "Moving average convergence/divergence (MACD) values.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            SERIES_TYPE,
            FASTPERIOD,
            SLOWPERIOD,
            SIGNALPERIOD,
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!(
        "get_macdext",
        "MACDEXT",
        "MACD with controllable moving average types.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            SERIES_TYPE,
            FASTPERIOD,
            SLOWPERIOD,
            SIGNALPERIOD,
            ma_type("fastmatype", "Moving average type of the fast average."),
            ma_type("slowmatype", "Moving average type of the slow average."),
            ma_type("signalmatype", "Moving average type of the signal average."),
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!(
        "get_stoch",
        "STOCH",
        "Stochastic oscillator (STOCH) values.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            FASTKPERIOD,
            period("slowkperiod", "Time period of the slowk moving average."),
            period("slowdperiod", "Time period of the slowd moving average."),
            ma_type("slowkmatype", "Moving average type of the slowk line."),
            ma_type("slowdmatype", "Moving average type of the slowd line."),
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!(
        "get_stochf",
        "STOCHF",
        "Stochastic fast (STOCHF) values.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            FASTKPERIOD,
            FASTDPERIOD,
            FASTDMATYPE,
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!("get_rsi", "RSI", "Relative strength index (RSI) values.", PERIOD_AND_SERIES),
    indicator!(
        "get_stochrsi",
        "STOCHRSI",
        "Stochastic relative strength index (STOCHRSI) values.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            TIME_PERIOD,
            SERIES_TYPE,
            FASTKPERIOD,
            FASTDPERIOD,
            FASTDMATYPE,
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!("get_willr", "WILLR", "Williams' %R (WILLR) values.", PERIOD_ONLY),
    indicator!("get_adx", "ADX", "Average directional movement index (ADX) values.", PERIOD_ONLY),
    indicator!(
        "get_adxr",
        "ADXR",
        "Average directional movement index rating (ADXR) values.",
        PERIOD_ONLY
    ),
    indicator!(
        "get_apo",
        "APO",
        "Absolute price oscillator (APO) values.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            SERIES_TYPE,
            FASTPERIOD,
            SLOWPERIOD,
            MATYPE,
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!(
        "get_ppo",
        "PPO",
        "Percentage price oscillator (PPO) values.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            SERIES_TYPE,
            FASTPERIOD,
            SLOWPERIOD,
            MATYPE,
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!("get_mom", "MOM", "Momentum (MOM) values.", PERIOD_AND_SERIES),
    indicator!("get_bop", "BOP", "Balance of power (BOP) values.", PERIOD_ONLY),
    indicator!("get_cci", "CCI", "Commodity channel index (CCI) values.", PERIOD_ONLY),
    indicator!("get_cmo", "CMO", "Chande momentum oscillator (CMO) values.", PERIOD_AND_SERIES),
    indicator!("get_roc", "ROC", "Rate of change (ROC) values.", PERIOD_AND_SERIES),
    indicator!("get_rocr", "ROCR", "Rate of change ratio (ROCR) values.", PERIOD_AND_SERIES),
    indicator!("get_aroon", "AROON", "Aroon (AROON) values.", PERIOD_AND_SERIES),
    indicator!("get_aroonosc", "AROONOSC", "Aroon oscillator (AROONOSC) values.", PERIOD_AND_SERIES),
    indicator!("get_mfi", "MFI", "Money flow index (MFI) values.", PERIOD_AND_SERIES),
    indicator!(
        "get_trix",
        "TRIX",
        "1-day rate of change of a triple smooth EMA (TRIX) values.",
        PERIOD_AND_SERIES
    ),
    indicator!(
        "get_ultosc",
        "ULTOSC",
        "Ultimate oscillator (ULTOSC) values.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            period("timeperiod1", "First time period. Provider default is 7."),
            period("timeperiod2", "Second time period. Provider default is 14."),
            period("timeperiod3", "Third time period. Provider default is 28."),
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!("get_dx", "DX", "Directional movement index (DX) values.", PERIOD_AND_SERIES),
    indicator!("get_minus_di", "MINUS_DI", "Minus directional indicator (MINUS_DI) values.", PERIOD_ONLY),
    indicator!("get_plus_di", "PLUS_DI", "Plus directional indicator (PLUS_DI) values.", PERIOD_ONLY),
    indicator!("get_minus_dm", "MINUS_DM", "Minus directional movement (MINUS_DM) values.", PERIOD_ONLY),
    indicator!("get_plus_dm", "PLUS_DM", "Plus directional movement (PLUS_DM) values.", PERIOD_ONLY),
    indicator!(
        "get_bbands",
        "BBANDS",
        "Bollinger bands (BBANDS) values.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            TIME_PERIOD,
            SERIES_TYPE,
            period("nbdevup", "Standard deviation multiplier of the upper band."),
            period("nbdevdn", "Standard deviation multiplier of the lower band."),
            MATYPE,
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!("get_midpoint", "MIDPOINT", "Midpoint (highest + lowest) / 2 values.", PERIOD_AND_SERIES),
    indicator!("get_midprice", "MIDPRICE", "Midpoint price (highest high + lowest low) / 2 values.", PERIOD_ONLY),
    indicator!(
        "get_sar",
        "SAR",
        "Parabolic SAR values.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            positive_float("acceleration", "Acceleration factor. Provider default is 0.01."),
            positive_float("maximum", "Acceleration factor maximum. Provider default is 0.20."),
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!("get_trange", "TRANGE", "True range (TRANGE) values.", PRICE_VOLUME),
    indicator!("get_atr", "ATR", "Average true range (ATR) values.", PERIOD_ONLY),
    indicator!("get_natr", "NATR", "Normalized average true range (NATR) values.", PERIOD_ONLY),
    indicator!("get_ad", "AD", "Chaikin A/D line values.", PRICE_VOLUME),
    indicator!(
        "get_adosc",
        "ADOSC",
        "Chaikin A/D oscillator (ADOSC) values.",
        [
            SYMBOL,
            INDICATOR_INTERVAL,
            period("fastperiod", "Time period of the fast EMA."),
            period("slowperiod", "Time period of the slow EMA."),
            MONTH,
            ENTITLEMENT,
        ]
    ),
    indicator!("get_obv", "OBV", "On balance volume (OBV) values.", PRICE_VOLUME),
    indicator!(
        "get_ht_trendline",
        "HT_TRENDLINE",
        "Hilbert transform instantaneous trendline values.",
        SERIES_ONLY
    ),
    indicator!("get_ht_sine", "HT_SINE", "Hilbert transform sine wave values.", SERIES_ONLY),
    indicator!("get_ht_trendmode", "HT_TRENDMODE", "Hilbert transform trend vs cycle mode values.", SERIES_ONLY),
    indicator!(
        "get_ht_dcperiod",
        "HT_DCPERIOD",
        "Hilbert transform dominant cycle period values.",
        SERIES_ONLY
    ),
    indicator!(
        "get_ht_dcphase",
        "HT_DCPHASE",
        "Hilbert transform dominant cycle phase values.",
        SERIES_ONLY
    ),
    indicator!("get_ht_phasor", "HT_PHASOR", "Hilbert transform phasor components.", SERIES_ONLY),
];
